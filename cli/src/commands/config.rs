//! Config command - show and change stored settings.

use anyhow::Result;
use clap::ValueEnum;
use nioadapter_core::{AdapterKind, BindPolicy, Config, ConfigStore};

/// Bind policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Overwrite an existing binding
    Replace,
    /// Refuse to bind an already-bound port
    Reject,
}

impl From<PolicyArg> for BindPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Replace => BindPolicy::Replace,
            PolicyArg::Reject => BindPolicy::Reject,
        }
    }
}

fn policy_name(policy: BindPolicy) -> &'static str {
    match policy {
        BindPolicy::Replace => "replace",
        BindPolicy::Reject => "reject",
    }
}

pub async fn show(store: &ConfigStore, json: bool) -> Result<()> {
    let config = Config {
        bind_policy: store.get_bind_policy().await?,
        default_kind: store.get_default_kind().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Config file: {}", store.config_path().display());
    println!();
    println!("Bind policy:   {}", policy_name(config.bind_policy));
    match config.default_kind {
        Some(kind) => println!("Default model: {}", kind),
        None => println!("Default model: (none)"),
    }

    Ok(())
}

pub async fn set_bind_policy(store: &ConfigStore, policy: BindPolicy) -> Result<()> {
    store.set_bind_policy(policy).await?;
    println!("Bind policy set to {}", policy_name(policy));
    Ok(())
}

/// Set the default adapter model, or clear it when `kind` is `None`.
pub async fn set_default_kind(store: &ConfigStore, kind: Option<&str>) -> Result<()> {
    let kind = kind.map(str::parse::<AdapterKind>).transpose()?;
    store.set_default_kind(kind).await?;

    match kind {
        Some(kind) => println!("Default model set to {}", kind),
        None => println!("Default model cleared"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[test]
    fn test_policy_arg_conversion() {
        assert_eq!(BindPolicy::from(PolicyArg::Replace), BindPolicy::Replace);
        assert_eq!(BindPolicy::from(PolicyArg::Reject), BindPolicy::Reject);
    }

    #[tokio::test]
    async fn test_set_bind_policy() {
        let (store, _dir) = test_store();
        set_bind_policy(&store, PolicyArg::Reject.into()).await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.bind_policy, BindPolicy::Reject);
        assert!(config.default_kind.is_none());
    }

    #[tokio::test]
    async fn test_set_and_clear_default_kind() {
        let (store, _dir) = test_store();
        set_default_kind(&store, Some("nm-4t")).await.unwrap();
        assert_eq!(store.get_default_kind().await.unwrap(), Some(AdapterKind::Nm4T));

        set_default_kind(&store, None).await.unwrap();
        assert_eq!(store.get_default_kind().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_default_kind_leaves_file_alone() {
        let (store, _dir) = test_store();
        set_default_kind(&store, Some("C2600-MB-1E")).await.unwrap();

        assert!(set_default_kind(&store, Some("NM-99X")).await.is_err());
        assert_eq!(
            store.get_default_kind().await.unwrap(),
            Some(AdapterKind::C2600Mb1E)
        );
    }

    #[tokio::test]
    async fn test_show_without_file() {
        let (store, _dir) = test_store();
        show(&store, true).await.unwrap();
        show(&store, false).await.unwrap();
        assert!(!store.config_path().exists());
    }
}
