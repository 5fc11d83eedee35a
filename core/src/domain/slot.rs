//! WIC slot state.

use std::mem;

/// State of one WIC bay on an adapter.
///
/// Transitions are `Empty -> Occupied` on install and `Occupied -> Empty` on
/// uninstall; the adapter rejects every other transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WicSlot<W> {
    /// No module installed.
    Empty,
    /// A module is installed and contributes `interfaces` ports.
    ///
    /// The interface count is captured at install time so uninstall removes
    /// exactly the addresses that were added.
    Occupied { wic: W, interfaces: u32 },
}

impl<W> Default for WicSlot<W> {
    fn default() -> Self {
        WicSlot::Empty
    }
}

impl<W> WicSlot<W> {
    pub fn is_empty(&self) -> bool {
        matches!(self, WicSlot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// The installed module, if any.
    pub fn wic(&self) -> Option<&W> {
        match self {
            WicSlot::Occupied { wic, .. } => Some(wic),
            WicSlot::Empty => None,
        }
    }

    /// Number of ports the installed module contributes (0 when empty).
    pub fn interfaces(&self) -> u32 {
        match self {
            WicSlot::Occupied { interfaces, .. } => *interfaces,
            WicSlot::Empty => 0,
        }
    }

    /// Empty the slot, returning the module and its recorded interface count.
    pub fn take(&mut self) -> Option<(W, u32)> {
        match mem::replace(self, WicSlot::Empty) {
            WicSlot::Occupied { wic, interfaces } => Some((wic, interfaces)),
            WicSlot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_empties_slot() {
        let mut slot = WicSlot::Occupied {
            wic: "WIC-2T",
            interfaces: 2,
        };
        assert!(slot.is_occupied());
        assert_eq!(slot.interfaces(), 2);

        assert_eq!(slot.take(), Some(("WIC-2T", 2)));
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }
}
