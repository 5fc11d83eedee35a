//! Catalog command - list adapter and WIC models.

use anyhow::Result;
use nioadapter_core::{AdapterKind, WicKind};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdapterRow {
    name: &'static str,
    interfaces: u32,
    wic_slots: usize,
    removable: bool,
}

#[derive(Serialize)]
struct WicRow {
    name: &'static str,
    interfaces: u32,
}

#[derive(Serialize)]
struct Catalog {
    adapters: Vec<AdapterRow>,
    wics: Vec<WicRow>,
}

pub fn run(json: bool) -> Result<()> {
    let catalog = Catalog {
        adapters: AdapterKind::ALL
            .into_iter()
            .map(|kind| AdapterRow {
                name: kind.name(),
                interfaces: kind.interfaces(),
                wic_slots: kind.wics(),
                removable: kind.removable(),
            })
            .collect(),
        wics: WicKind::ALL
            .into_iter()
            .map(|kind| WicRow {
                name: kind.name(),
                interfaces: kind.interfaces(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{:<16} {:<6} {:<6} REMOVABLE", "ADAPTER", "PORTS", "WICS");
    println!("{}", "-".repeat(40));
    for row in &catalog.adapters {
        println!(
            "{:<16} {:<6} {:<6} {}",
            row.name,
            row.interfaces,
            row.wic_slots,
            if row.removable { "yes" } else { "no" }
        );
    }

    println!();
    println!("{:<16} PORTS", "WIC");
    println!("{}", "-".repeat(40));
    for row in &catalog.wics {
        println!("{:<16} {}", row.name, row.interfaces);
    }

    Ok(())
}
