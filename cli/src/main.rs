//! NioAdapter CLI - Inspect adapter port and WIC slot layouts
//!
//! A command-line tool for listing adapter and WIC models and for
//! previewing the port addresses an adapter exposes once WICs are
//! installed and NIOs are bound.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::config::PolicyArg;
use nioadapter_core::ConfigStore;

#[derive(Parser)]
#[command(name = "nioadapter")]
#[command(author, version, about = "Inspect adapter port and WIC slot layouts")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (default: ~/.nioadapter/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List adapter and WIC models
    #[command(alias = "ls")]
    Catalog,

    /// Build an adapter and show its ports
    Show {
        /// Adapter model (e.g. C2600-MB-1E); falls back to the configured default
        kind: Option<String>,

        /// Install a WIC, as SLOT=MODEL (e.g. 0=WIC-2T)
        #[arg(short, long = "wic", value_name = "SLOT=MODEL")]
        wics: Vec<String>,

        /// Bind a NIO label to a port, as PORT=LABEL (e.g. 16=udp:10001)
        #[arg(short, long = "bind", value_name = "PORT=LABEL")]
        binds: Vec<String>,
    },

    /// Show or change stored settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current settings
    Show,
    /// Set what happens when a NIO is bound to an already-bound port
    BindPolicy { policy: PolicyArg },
    /// Set the default adapter model, or clear it when no model is given
    DefaultKind { kind: Option<String> },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = match cli.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };

    match cli.command {
        Commands::Catalog => commands::catalog::run(cli.json)?,
        Commands::Show { kind, wics, binds } => {
            let config = store.load().await?;
            commands::show::run(&config, kind.as_deref(), &wics, &binds, cli.json)?;
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::config::show(&store, cli.json).await?,
            Some(ConfigAction::BindPolicy { policy }) => {
                commands::config::set_bind_policy(&store, policy.into()).await?
            }
            Some(ConfigAction::DefaultKind { kind }) => {
                commands::config::set_default_kind(&store, kind.as_deref()).await?
            }
        },
    }

    Ok(())
}
