//! Error types for the nioadapter-core library.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing an adapter's port and WIC layout.
///
/// Every variant raised by [`Adapter`](crate::Adapter) is detected before any
/// mutation, so a failed call leaves the adapter untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// WIC slot index is not below the adapter's slot count.
    #[error("WIC slot {slot} out of range (adapter has {wic_count} slots)")]
    SlotOutOfRange { slot: usize, wic_count: usize },

    /// Port address falls outside the built-in block and every slot range.
    #[error("Port {port} is outside every port range of this adapter")]
    PortOutOfRange { port: u32 },

    /// A WIC is already installed in the slot.
    #[error("WIC slot {slot} is already occupied")]
    SlotOccupied { slot: usize },

    /// No WIC is installed in the slot.
    #[error("WIC slot {slot} is empty")]
    SlotEmpty { slot: usize },

    /// WIC declares more ports than fit in one slot range.
    #[error("WIC for slot {slot} declares {interfaces} interfaces (max 16)")]
    TooManyWicInterfaces { slot: usize, interfaces: u32 },

    /// A slot range would overlap an address that already exists.
    #[error("Port {port} already exists, cannot install WIC in slot {slot}")]
    PortConflict { port: u32, slot: usize },

    /// Port address is not currently present on the adapter.
    #[error("Port {port} not found")]
    PortNotFound { port: u32 },

    /// Port already has a NIO and the binding policy rejects replacement.
    #[error("Port {port} already has a NIO bound")]
    PortAlreadyBound { port: u32 },

    /// Adapter model name not found in the catalog.
    #[error("Unknown adapter kind: {0}")]
    UnknownAdapterKind(String),

    /// WIC model name not found in the catalog.
    #[error("Unknown WIC kind: {0}")]
    UnknownWicKind(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
