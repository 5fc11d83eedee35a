//! Adapter and WIC model catalogs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::ports::WicModule;

// ============================================================================
// AdapterKind
// ============================================================================

/// Static capabilities of an adapter model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Catalog name (e.g. "C2600-MB-1E").
    pub name: &'static str,
    /// Number of built-in interfaces.
    pub interfaces: u32,
    /// Number of WIC slots.
    pub wics: usize,
    /// Whether the adapter can be detached from its chassis slot.
    pub removable: bool,
}

const fn caps(name: &'static str, interfaces: u32, wics: usize, removable: bool) -> Capabilities {
    Capabilities {
        name,
        interfaces,
        wics,
        removable,
    }
}

/// Adapter model.
///
/// Motherboard and I/O controller models are soldered to the chassis and are
/// not removable; network modules and port adapters are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AdapterKind {
    /// Base model with caller-chosen interface and slot counts.
    #[default]
    Generic,
    C1700Mb1Fe,
    C1700MbWic1,
    C2600Mb1E,
    C2600Mb2E,
    C2600Mb1Fe,
    C2600Mb2Fe,
    C7200IoFe,
    C7200Io2Fe,
    C7200IoGeE,
    Gt96100Fe,
    Leopard2Fe,
    Nm1E,
    Nm4E,
    Nm1FeTx,
    Nm16Esw,
    Nm4T,
    PaA1,
    PaFeTx,
    Pa2FeTx,
    PaGe,
    Pa4T,
    Pa8T,
    Pa4E,
    Pa8E,
    PaPosOc3,
}

impl AdapterKind {
    /// All catalog models, in display order.
    pub const ALL: [AdapterKind; 26] = [
        AdapterKind::Generic,
        AdapterKind::C1700Mb1Fe,
        AdapterKind::C1700MbWic1,
        AdapterKind::C2600Mb1E,
        AdapterKind::C2600Mb2E,
        AdapterKind::C2600Mb1Fe,
        AdapterKind::C2600Mb2Fe,
        AdapterKind::C7200IoFe,
        AdapterKind::C7200Io2Fe,
        AdapterKind::C7200IoGeE,
        AdapterKind::Gt96100Fe,
        AdapterKind::Leopard2Fe,
        AdapterKind::Nm1E,
        AdapterKind::Nm4E,
        AdapterKind::Nm1FeTx,
        AdapterKind::Nm16Esw,
        AdapterKind::Nm4T,
        AdapterKind::PaA1,
        AdapterKind::PaFeTx,
        AdapterKind::Pa2FeTx,
        AdapterKind::PaGe,
        AdapterKind::Pa4T,
        AdapterKind::Pa8T,
        AdapterKind::Pa4E,
        AdapterKind::Pa8E,
        AdapterKind::PaPosOc3,
    ];

    /// Capability table lookup.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            AdapterKind::Generic => caps("Generic", 0, 0, true),
            AdapterKind::C1700Mb1Fe => caps("C1700-MB-1FE", 1, 2, false),
            AdapterKind::C1700MbWic1 => caps("C1700-MB-WIC1", 0, 2, false),
            AdapterKind::C2600Mb1E => caps("C2600-MB-1E", 1, 3, false),
            AdapterKind::C2600Mb2E => caps("C2600-MB-2E", 2, 3, false),
            AdapterKind::C2600Mb1Fe => caps("C2600-MB-1FE", 1, 3, false),
            AdapterKind::C2600Mb2Fe => caps("C2600-MB-2FE", 2, 3, false),
            AdapterKind::C7200IoFe => caps("C7200-IO-FE", 1, 0, false),
            AdapterKind::C7200Io2Fe => caps("C7200-IO-2FE", 2, 0, false),
            AdapterKind::C7200IoGeE => caps("C7200-IO-GE-E", 1, 0, false),
            AdapterKind::Gt96100Fe => caps("GT96100-FE", 2, 3, false),
            AdapterKind::Leopard2Fe => caps("Leopard-2FE", 2, 0, false),
            AdapterKind::Nm1E => caps("NM-1E", 1, 0, true),
            AdapterKind::Nm4E => caps("NM-4E", 4, 0, true),
            AdapterKind::Nm1FeTx => caps("NM-1FE-TX", 1, 0, true),
            AdapterKind::Nm16Esw => caps("NM-16ESW", 16, 0, true),
            AdapterKind::Nm4T => caps("NM-4T", 4, 0, true),
            AdapterKind::PaA1 => caps("PA-A1", 1, 0, true),
            AdapterKind::PaFeTx => caps("PA-FE-TX", 1, 0, true),
            AdapterKind::Pa2FeTx => caps("PA-2FE-TX", 2, 0, true),
            AdapterKind::PaGe => caps("PA-GE", 1, 0, true),
            AdapterKind::Pa4T => caps("PA-4T+", 4, 0, true),
            AdapterKind::Pa8T => caps("PA-8T", 8, 0, true),
            AdapterKind::Pa4E => caps("PA-4E", 4, 0, true),
            AdapterKind::Pa8E => caps("PA-8E", 8, 0, true),
            AdapterKind::PaPosOc3 => caps("PA-POS-OC3", 1, 0, true),
        }
    }

    pub const fn name(self) -> &'static str {
        self.capabilities().name
    }

    pub const fn interfaces(self) -> u32 {
        self.capabilities().interfaces
    }

    pub const fn wics(self) -> usize {
        self.capabilities().wics
    }

    pub const fn removable(self) -> bool {
        self.capabilities().removable
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdapterKind {
    type Err = Error;

    /// Parse a catalog name. Matching ignores case and treats `_` as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        AdapterKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| Error::UnknownAdapterKind(s.to_string()))
    }
}

impl TryFrom<String> for AdapterKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AdapterKind> for String {
    fn from(kind: AdapterKind) -> Self {
        kind.name().to_string()
    }
}

// ============================================================================
// WicKind
// ============================================================================

/// WAN interface card model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WicKind {
    /// One Ethernet port.
    Wic1Enet,
    /// One serial port.
    Wic1T,
    /// Two serial ports.
    Wic2T,
}

impl WicKind {
    pub const ALL: [WicKind; 3] = [WicKind::Wic1Enet, WicKind::Wic1T, WicKind::Wic2T];

    pub const fn name(self) -> &'static str {
        match self {
            WicKind::Wic1Enet => "WIC-1ENET",
            WicKind::Wic1T => "WIC-1T",
            WicKind::Wic2T => "WIC-2T",
        }
    }

    pub const fn interfaces(self) -> u32 {
        match self {
            WicKind::Wic1Enet | WicKind::Wic1T => 1,
            WicKind::Wic2T => 2,
        }
    }
}

impl WicModule for WicKind {
    fn interface_count(&self) -> u32 {
        self.interfaces()
    }

    fn display_name(&self) -> String {
        self.name().to_string()
    }
}

impl fmt::Display for WicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        WicKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| Error::UnknownWicKind(s.to_string()))
    }
}

impl TryFrom<String> for WicKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WicKind> for String {
    fn from(kind: WicKind) -> Self {
        kind.name().to_string()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace('_', "-")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_is_removable() {
        assert!(AdapterKind::Generic.removable());
        assert_eq!(AdapterKind::default(), AdapterKind::Generic);
    }

    #[test]
    fn test_motherboards_are_fixed() {
        assert!(!AdapterKind::C2600Mb1E.removable());
        assert!(!AdapterKind::C7200IoFe.removable());
        assert!(!AdapterKind::Gt96100Fe.removable());
        assert!(AdapterKind::Nm4T.removable());
        assert!(AdapterKind::PaFeTx.removable());
    }

    #[test]
    fn test_capabilities() {
        let caps = AdapterKind::C2600Mb2Fe.capabilities();
        assert_eq!(caps.name, "C2600-MB-2FE");
        assert_eq!(caps.interfaces, 2);
        assert_eq!(caps.wics, 3);
        assert_eq!(AdapterKind::Nm16Esw.interfaces(), 16);
    }

    #[test]
    fn test_parse_adapter_kind() {
        assert_eq!("C2600-MB-1E".parse::<AdapterKind>().unwrap(), AdapterKind::C2600Mb1E);
        assert_eq!("c2600_mb_1e".parse::<AdapterKind>().unwrap(), AdapterKind::C2600Mb1E);
        assert_eq!("PA-4T+".parse::<AdapterKind>().unwrap(), AdapterKind::Pa4T);
        assert!(matches!(
            "NM-99X".parse::<AdapterKind>(),
            Err(Error::UnknownAdapterKind(_))
        ));
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for kind in AdapterKind::ALL {
            assert_eq!(kind.name().parse::<AdapterKind>().unwrap(), kind);
        }
        for kind in WicKind::ALL {
            assert_eq!(kind.name().parse::<WicKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_wic_kind() {
        assert_eq!(WicKind::Wic2T.interface_count(), 2);
        assert_eq!(WicKind::Wic1Enet.to_string(), "WIC-1ENET");
        assert!(matches!("WIC-9Z".parse::<WicKind>(), Err(Error::UnknownWicKind(_))));
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        let json = serde_json::to_string(&AdapterKind::C1700Mb1Fe).unwrap();
        assert_eq!(json, "\"C1700-MB-1FE\"");
        let kind: WicKind = serde_json::from_str("\"WIC-1T\"").unwrap();
        assert_eq!(kind, WicKind::Wic1T);
    }
}
