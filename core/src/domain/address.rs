//! Port address arithmetic for WIC slot ranges.
//!
//! Built-in interfaces occupy addresses starting at 0. Each WIC slot owns a
//! block of 16 addresses starting on the next 16-boundary after the previous
//! one:
//!
//! | slot | addresses |
//! |------|-----------|
//! | 0    | 16..=31   |
//! | 1    | 32..=47   |
//! | 2    | 48..=63   |

use std::ops::Range;

use crate::error::{Error, Result};

/// Number of port addresses reserved for each WIC slot.
pub const WIC_PORT_SPAN: u32 = 16;

/// Number of WIC slots whose full 16-port range fits below `u32::MAX`.
pub const MAX_WIC_SLOTS: usize = (u32::MAX / WIC_PORT_SPAN) as usize - 1;

/// First port address of a WIC slot's range.
///
/// Fails with [`Error::SlotOutOfRange`] for slots past [`MAX_WIC_SLOTS`].
pub fn wic_base_port(slot: usize) -> Result<u32> {
    u32::try_from(slot)
        .ok()
        .filter(|_| slot < MAX_WIC_SLOTS)
        .and_then(|s| s.checked_add(1))
        .and_then(|s| s.checked_mul(WIC_PORT_SPAN))
        .ok_or(Error::SlotOutOfRange {
            slot,
            wic_count: MAX_WIC_SLOTS,
        })
}

/// Port addresses contributed by a WIC with `interfaces` ports in `slot`.
///
/// A WIC may not declare more ports than one slot range holds.
pub fn wic_port_range(slot: usize, interfaces: u32) -> Result<Range<u32>> {
    if interfaces > WIC_PORT_SPAN {
        return Err(Error::TooManyWicInterfaces { slot, interfaces });
    }
    let base = wic_base_port(slot)?;
    let end = base
        .checked_add(interfaces)
        .ok_or(Error::PortOutOfRange { port: base })?;
    Ok(base..end)
}

/// Map a port address back to the WIC slot whose range contains it.
///
/// Returns `Ok(None)` for addresses in the built-in block (below 16, or below
/// `interface_count` for adapters with more built-in ports than that).
pub fn slot_for_port(port: u32, interface_count: u32, wic_count: usize) -> Result<Option<usize>> {
    if port < WIC_PORT_SPAN || port < interface_count {
        return Ok(None);
    }
    let slot = (port / WIC_PORT_SPAN - 1) as usize;
    if slot < wic_count {
        Ok(Some(slot))
    } else {
        Err(Error::PortOutOfRange { port })
    }
}
