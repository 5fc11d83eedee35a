//! WIC module port (interface).

use std::rc::Rc;
use std::sync::Arc;

/// Port for expansion modules installed in an adapter's WIC slots.
///
/// The adapter only reads the declared interface count when the module is
/// installed. Callers keep ownership of the module's real state and may pass
/// shared handles (`Arc<T>`, `&T`) instead of values.
pub trait WicModule {
    /// Number of ports this module contributes.
    fn interface_count(&self) -> u32;

    /// Display name used in snapshots and logs.
    fn display_name(&self) -> String {
        format!("WIC ({} ports)", self.interface_count())
    }
}

impl<T: WicModule + ?Sized> WicModule for &T {
    fn interface_count(&self) -> u32 {
        (**self).interface_count()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }
}

impl<T: WicModule + ?Sized> WicModule for Arc<T> {
    fn interface_count(&self) -> u32 {
        (**self).interface_count()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }
}

impl<T: WicModule + ?Sized> WicModule for Rc<T> {
    fn interface_count(&self) -> u32 {
        (**self).interface_count()
    }

    fn display_name(&self) -> String {
        (**self).display_name()
    }
}
