//! Shared adapter application service.

use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{Adapter, AdapterSnapshot, BindPolicy};
use crate::error::Result;
use crate::ports::WicModule;

/// Application service for editing one adapter from several threads.
///
/// `Adapter` itself has no internal locking. This service keeps it behind a
/// `RwLock` and takes the lock once per operation, so a WIC install or
/// uninstall is never observed half done.
pub struct AdapterService<W, N> {
    adapter: RwLock<Adapter<W, N>>,
    policy: BindPolicy,
}

impl<W: WicModule, N: Clone> AdapterService<W, N> {
    /// Create a service around an adapter using the given binding policy.
    pub fn new(adapter: Adapter<W, N>, policy: BindPolicy) -> Self {
        Self {
            adapter: RwLock::new(adapter),
            policy,
        }
    }

    pub fn policy(&self) -> BindPolicy {
        self.policy
    }

    pub fn removable(&self) -> bool {
        self.adapter.read().removable()
    }

    pub fn port_exists(&self, port: u32) -> bool {
        self.adapter.read().port_exists(port)
    }

    pub fn wic_slot_available(&self, slot: usize) -> Result<bool> {
        self.adapter.read().wic_slot_available(slot)
    }

    pub fn install_wic(&self, slot: usize, wic: W) -> Result<()> {
        self.adapter.write().install_wic(slot, wic)
    }

    pub fn uninstall_wic(&self, slot: usize) -> Result<W> {
        self.adapter.write().uninstall_wic(slot)
    }

    pub fn uninstall_wic_detached(&self, slot: usize) -> Result<(W, Vec<(u32, N)>)> {
        self.adapter.write().uninstall_wic_detached(slot)
    }

    /// Bind a NIO using the service's policy.
    pub fn add_nio(&self, port: u32, nio: N) -> Result<Option<N>> {
        let previous = self.adapter.write().bind_nio(port, nio, self.policy)?;
        if previous.is_some() {
            debug!(port = port, "Replaced NIO binding");
        }
        Ok(previous)
    }

    pub fn remove_nio(&self, port: u32) -> Result<Option<N>> {
        self.adapter.write().remove_nio(port)
    }

    /// Clone of the NIO bound to a port.
    pub fn get_nio(&self, port: u32) -> Result<Option<N>> {
        Ok(self.adapter.read().get_nio(port)?.cloned())
    }

    /// Sorted list of all port addresses.
    pub fn port_ids(&self) -> Vec<u32> {
        self.adapter.read().ports().keys().copied().collect()
    }

    /// Run a read-only closure against the adapter under the read lock.
    pub fn with_adapter<R>(&self, f: impl FnOnce(&Adapter<W, N>) -> R) -> R {
        f(&self.adapter.read())
    }

    pub fn snapshot(&self) -> AdapterSnapshot
    where
        N: fmt::Display,
    {
        self.adapter.read().snapshot()
    }

    /// Consume the service and return the adapter.
    pub fn into_inner(self) -> Adapter<W, N> {
        self.adapter.into_inner()
    }
}
