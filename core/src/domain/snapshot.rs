//! Serializable views of an adapter's layout.

use serde::{Deserialize, Serialize};

use super::kind::AdapterKind;

/// Point-in-time copy of an adapter's ports and WIC slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSnapshot {
    pub kind: AdapterKind,
    pub removable: bool,
    pub interface_count: u32,
    pub wic_count: usize,
    /// Every port address, in ascending order.
    pub ports: Vec<PortSnapshot>,
    pub wic_slots: Vec<SlotSnapshot>,
}

/// One port address and what is bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortSnapshot {
    pub port: u32,
    /// Slot that contributed this port, `None` for built-in ports.
    pub wic_slot: Option<usize>,
    /// Display form of the bound NIO.
    pub nio: Option<String>,
}

/// One WIC slot and the module installed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSnapshot {
    pub slot: usize,
    /// First address of the slot's range, `None` if it is not addressable.
    pub first_port: Option<u32>,
    pub wic: Option<String>,
    pub interfaces: u32,
}

impl AdapterSnapshot {
    /// Number of ports with a NIO bound.
    pub fn bound_count(&self) -> usize {
        self.ports.iter().filter(|p| p.nio.is_some()).count()
    }
}
