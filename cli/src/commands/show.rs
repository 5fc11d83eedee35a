//! Show command - build an adapter and print its port layout.

use anyhow::{anyhow, bail, Context, Result};
use nioadapter_core::{Adapter, AdapterKind, AdapterService, AdapterSnapshot, Config, WicKind};

pub fn run(
    config: &Config,
    kind: Option<&str>,
    wics: &[String],
    binds: &[String],
    json: bool,
) -> Result<()> {
    let kind = match kind {
        Some(name) => name.parse::<AdapterKind>()?,
        None => config
            .default_kind
            .ok_or_else(|| anyhow!("No adapter model given and no defaultKind configured"))?,
    };

    let service: AdapterService<WicKind, String> =
        AdapterService::new(Adapter::from_kind(kind), config.bind_policy);

    for arg in wics {
        let (slot, wic) = parse_wic(arg)?;
        service
            .install_wic(slot, wic)
            .with_context(|| format!("Cannot install {} in slot {}", wic, slot))?;
    }

    for arg in binds {
        let (port, label) = parse_bind(arg)?;
        service
            .add_nio(port, label)
            .with_context(|| format!("Cannot bind port {}", port))?;
    }

    let snapshot = service.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_table(&snapshot);
    Ok(())
}

fn print_table(snapshot: &AdapterSnapshot) {
    println!(
        "{} ({}removable, {} built-in ports, {} WIC slots)",
        snapshot.kind,
        if snapshot.removable { "" } else { "not " },
        snapshot.interface_count,
        snapshot.wic_count
    );

    if !snapshot.wic_slots.is_empty() {
        println!();
        println!("{:<6} {:<12} {:<6} PORTS", "SLOT", "WIC", "FIRST");
        println!("{}", "-".repeat(40));
        for slot in &snapshot.wic_slots {
            println!(
                "{:<6} {:<12} {:<6} {}",
                slot.slot,
                slot.wic.as_deref().unwrap_or("-"),
                slot.first_port
                    .map(|port| port.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                slot.interfaces
            );
        }
    }

    println!();
    println!("{:<6} {:<6} NIO", "PORT", "SOURCE");
    println!("{}", "-".repeat(40));
    for port in &snapshot.ports {
        let source = port
            .wic_slot
            .map(|slot| format!("wic{}", slot))
            .unwrap_or_else(|| "fixed".to_string());
        println!(
            "{:<6} {:<6} {}",
            port.port,
            source,
            truncate(port.nio.as_deref().unwrap_or("-"), 40)
        );
    }

    println!(
        "\nTotal: {} ports, {} bound",
        snapshot.ports.len(),
        snapshot.bound_count()
    );
}

/// Parse `SLOT=MODEL`.
fn parse_wic(arg: &str) -> Result<(usize, WicKind)> {
    let (slot, model) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected SLOT=MODEL, got '{}'", arg))?;
    let slot = slot
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid WIC slot '{}'", slot))?;
    Ok((slot, model.parse::<WicKind>()?))
}

/// Parse `PORT=LABEL`.
fn parse_bind(arg: &str) -> Result<(u32, String)> {
    let (port, label) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected PORT=LABEL, got '{}'", arg))?;
    let port = port
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid port '{}'", port))?;
    let label = label.trim();
    if label.is_empty() {
        bail!("Empty NIO label for port {}", port);
    }
    Ok((port, label.to_string()))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
