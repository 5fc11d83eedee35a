//! NioAdapter Core Library
//!
//! Port and WIC slot topology model for virtual router interface cards.
//! Provides functionality to:
//! - Track which port addresses exist on an adapter
//! - Install and remove WICs, each adding a block of ports
//! - Bind and unbind NIO handles on ports
//! - Persist tool settings (binding policy, default adapter model)
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure topology model and catalogs
//! - `ports`: Trait definitions for external collaborators
//! - `application`: Thread-safe services
//!
//! # Addressing
//! Built-in ports start at 0. WIC slot `n` owns addresses
//! `16 * (n + 1) .. 16 * (n + 2)`, so slot 0 starts at 16, slot 1 at 32.

// Hexagonal architecture layers
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{
    Adapter, AdapterKind, AdapterSnapshot, BindPolicy, PortSnapshot, SlotSnapshot, WicKind,
    WicSlot,
};

// Re-export other commonly used types
pub use application::AdapterService;
pub use config::{Config, ConfigStore};
pub use error::{Error, Result};
pub use ports::WicModule;
