//! Adapter port and WIC slot model.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::address::{self, wic_port_range};
use super::kind::AdapterKind;
use super::slot::WicSlot;
use super::snapshot::{AdapterSnapshot, PortSnapshot, SlotSnapshot};
use crate::error::{Error, Result};
use crate::ports::WicModule;

// ============================================================================
// BindPolicy
// ============================================================================

/// What `bind_nio` does when the port already has a NIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindPolicy {
    /// Overwrite the existing binding and hand the old NIO back.
    #[default]
    Replace,
    /// Fail with [`Error::PortAlreadyBound`].
    Reject,
}

// ============================================================================
// Adapter
// ============================================================================

/// An interface card: built-in ports plus WIC slots that add port ranges.
///
/// `W` is the WIC handle type and `N` the NIO handle type. Both belong to the
/// caller; the adapter stores whatever handle it is given and returns it on
/// removal, never creating or tearing one down itself.
///
/// Port addresses `0..interface_count` are built in. A WIC in slot `s` adds
/// `16 * (s + 1) ..` for as many ports as it declares. The set of port
/// addresses only changes through [`install_wic`](Self::install_wic) and
/// [`uninstall_wic`](Self::uninstall_wic).
#[derive(Debug, Clone)]
pub struct Adapter<W, N> {
    kind: AdapterKind,
    interface_count: u32,
    ports: BTreeMap<u32, Option<N>>,
    wic_slots: Vec<WicSlot<W>>,
}

impl<W: WicModule, N> Adapter<W, N> {
    /// Create a generic adapter with `interfaces` built-in ports and `wics`
    /// empty WIC slots.
    pub fn new(interfaces: u32, wics: usize) -> Self {
        Self::build(AdapterKind::Generic, interfaces, wics)
    }

    /// Create an adapter with the interface and slot counts of a catalog model.
    pub fn from_kind(kind: AdapterKind) -> Self {
        Self::build(kind, kind.interfaces(), kind.wics())
    }

    fn build(kind: AdapterKind, interfaces: u32, wics: usize) -> Self {
        let ports = (0..interfaces).map(|port| (port, None)).collect();
        let wic_slots = (0..wics).map(|_| WicSlot::Empty).collect();
        Self {
            kind,
            interface_count: interfaces,
            ports,
            wic_slots,
        }
    }

    /// Whether the adapter can be removed from its chassis slot.
    pub fn removable(&self) -> bool {
        self.kind.removable()
    }

    /// Check whether a port address currently exists, including WIC ports.
    pub fn port_exists(&self, port: u32) -> bool {
        self.ports.contains_key(&port)
    }

    /// Check whether a WIC slot is empty.
    pub fn wic_slot_available(&self, slot: usize) -> Result<bool> {
        Ok(self.slot(slot)?.is_empty())
    }

    /// Install a WIC, adding its ports as unbound.
    ///
    /// Fails without touching the adapter if the slot is out of range or
    /// occupied, if the WIC declares more than 16 ports, or if one of its
    /// addresses already exists.
    pub fn install_wic(&mut self, slot: usize, wic: W) -> Result<()> {
        if self.slot(slot)?.is_occupied() {
            return Err(Error::SlotOccupied { slot });
        }

        let interfaces = wic.interface_count();
        let range = wic_port_range(slot, interfaces)?;
        if let Some(port) = range.clone().find(|port| self.ports.contains_key(port)) {
            return Err(Error::PortConflict { port, slot });
        }

        debug!(
            slot = slot,
            wic = %wic.display_name(),
            first_port = range.start,
            ports = interfaces,
            "Installing WIC"
        );

        self.ports.extend(range.map(|port| (port, None)));
        self.wic_slots[slot] = WicSlot::Occupied { wic, interfaces };
        Ok(())
    }

    /// Remove a WIC and its ports, returning the WIC handle.
    ///
    /// NIOs still bound to the removed ports are dropped with a warning.
    /// Use [`uninstall_wic_detached`](Self::uninstall_wic_detached) to get
    /// them back instead.
    pub fn uninstall_wic(&mut self, slot: usize) -> Result<W> {
        let (wic, detached) = self.uninstall_wic_detached(slot)?;
        for (port, _) in &detached {
            warn!(slot = slot, port = *port, "Dropping NIO bound to uninstalled WIC port");
        }
        Ok(wic)
    }

    /// Remove a WIC and its ports, returning the WIC handle along with every
    /// `(port, nio)` binding that was on those ports.
    pub fn uninstall_wic_detached(&mut self, slot: usize) -> Result<(W, Vec<(u32, N)>)> {
        let state = self.slot(slot)?;
        if state.is_empty() {
            return Err(Error::SlotEmpty { slot });
        }
        let range = wic_port_range(slot, state.interfaces())?;

        let (wic, interfaces) = self
            .slot_mut(slot)?
            .take()
            .ok_or(Error::SlotEmpty { slot })?;

        let detached: Vec<(u32, N)> = range
            .filter_map(|port| self.ports.remove(&port).flatten().map(|nio| (port, nio)))
            .collect();

        debug!(
            slot = slot,
            wic = %wic.display_name(),
            ports = interfaces,
            detached = detached.len(),
            "Uninstalled WIC"
        );

        Ok((wic, detached))
    }

    /// Bind a NIO to a port, replacing any existing binding.
    ///
    /// Returns the NIO that was previously bound, if any.
    pub fn add_nio(&mut self, port: u32, nio: N) -> Result<Option<N>> {
        self.bind_nio(port, nio, BindPolicy::Replace)
    }

    /// Bind a NIO to a port under the given policy.
    pub fn bind_nio(&mut self, port: u32, nio: N, policy: BindPolicy) -> Result<Option<N>> {
        let entry = self
            .ports
            .get_mut(&port)
            .ok_or(Error::PortNotFound { port })?;

        if entry.is_some() && policy == BindPolicy::Reject {
            return Err(Error::PortAlreadyBound { port });
        }

        let previous = entry.replace(nio);
        debug!(port = port, replaced = previous.is_some(), "Bound NIO");
        Ok(previous)
    }

    /// Unbind the NIO on a port. Unbinding an unbound port is a no-op.
    pub fn remove_nio(&mut self, port: u32) -> Result<Option<N>> {
        let entry = self
            .ports
            .get_mut(&port)
            .ok_or(Error::PortNotFound { port })?;
        Ok(entry.take())
    }

    /// The NIO bound to a port, or `None` if the port is unbound.
    pub fn get_nio(&self, port: u32) -> Result<Option<&N>> {
        self.ports
            .get(&port)
            .map(Option::as_ref)
            .ok_or(Error::PortNotFound { port })
    }

    /// The WIC slot whose address range contains `port`.
    ///
    /// `None` means the address is in the built-in block.
    pub fn wic_slot_for_port(&self, port: u32) -> Result<Option<usize>> {
        address::slot_for_port(port, self.interface_count, self.wic_slots.len())
    }

    /// The WIC installed in a slot, if any.
    pub fn wic(&self, slot: usize) -> Result<Option<&W>> {
        Ok(self.slot(slot)?.wic())
    }

    /// Capture the current layout as a serializable snapshot.
    pub fn snapshot(&self) -> AdapterSnapshot
    where
        N: fmt::Display,
    {
        AdapterSnapshot {
            kind: self.kind,
            removable: self.removable(),
            interface_count: self.interface_count,
            wic_count: self.wic_slots.len(),
            ports: self
                .ports
                .iter()
                .map(|(&port, nio)| PortSnapshot {
                    port,
                    wic_slot: self.wic_slot_for_port(port).ok().flatten(),
                    nio: nio.as_ref().map(ToString::to_string),
                })
                .collect(),
            wic_slots: self
                .wic_slots
                .iter()
                .enumerate()
                .map(|(slot, state)| SlotSnapshot {
                    slot,
                    first_port: address::wic_base_port(slot).ok(),
                    wic: state.wic().map(WicModule::display_name),
                    interfaces: state.interfaces(),
                })
                .collect(),
        }
    }
}

impl<W, N> Adapter<W, N> {
    pub fn kind(&self) -> AdapterKind {
        self.kind
    }

    /// Number of built-in interfaces.
    pub fn interface_count(&self) -> u32 {
        self.interface_count
    }

    pub fn wic_count(&self) -> usize {
        self.wic_slots.len()
    }

    /// Read-only view of the port address to NIO mapping.
    pub fn ports(&self) -> &BTreeMap<u32, Option<N>> {
        &self.ports
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Read-only view of the WIC slots, indexed by slot number.
    pub fn wic_slots(&self) -> &[WicSlot<W>] {
        &self.wic_slots
    }

    /// Ports with a NIO bound, in address order.
    pub fn bound_ports(&self) -> impl Iterator<Item = (u32, &N)> + '_ {
        self.ports
            .iter()
            .filter_map(|(&port, nio)| nio.as_ref().map(|nio| (port, nio)))
    }

    /// Ports without a NIO, in address order.
    pub fn unbound_ports(&self) -> impl Iterator<Item = u32> + '_ {
        self.ports
            .iter()
            .filter(|(_, nio)| nio.is_none())
            .map(|(&port, _)| port)
    }

    fn slot(&self, slot: usize) -> Result<&WicSlot<W>> {
        let wic_count = self.wic_slots.len();
        self.wic_slots
            .get(slot)
            .ok_or(Error::SlotOutOfRange { slot, wic_count })
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut WicSlot<W>> {
        let wic_count = self.wic_slots.len();
        self.wic_slots
            .get_mut(slot)
            .ok_or(Error::SlotOutOfRange { slot, wic_count })
    }
}

impl<W, N> fmt::Display for Adapter<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied = self.wic_slots.iter().filter(|s| s.is_occupied()).count();
        write!(
            f,
            "{} ({} ports, {}/{} WIC slots occupied)",
            self.kind,
            self.ports.len(),
            occupied,
            self.wic_slots.len()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
