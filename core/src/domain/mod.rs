//! Domain layer - Adapter topology model.
//!
//! This module contains the adapter, its WIC slot state machine, the port
//! address arithmetic and the model catalogs. These types have no I/O
//! dependencies and can be tested in isolation.

pub mod address;
mod adapter;
mod kind;
mod slot;
mod snapshot;

// Re-export all domain types
pub use adapter::{Adapter, BindPolicy};
pub use address::{wic_base_port, wic_port_range, MAX_WIC_SLOTS, WIC_PORT_SPAN};
pub use kind::{AdapterKind, Capabilities, WicKind};
pub use slot::WicSlot;
pub use snapshot::{AdapterSnapshot, PortSnapshot, SlotSnapshot};
