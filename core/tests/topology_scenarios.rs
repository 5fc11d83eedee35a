//! End-to-end adapter scenarios through the public API.

use std::sync::Arc;

use nioadapter_core::{
    Adapter, AdapterKind, AdapterService, BindPolicy, Error, WicKind, WicModule,
};

/// Stand-in for a live NIO owned by the caller.
#[derive(Debug, PartialEq, Eq)]
struct UdpNio {
    lport: u16,
    rhost: String,
    rport: u16,
}

impl std::fmt::Display for UdpNio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "udp:{}->{}:{}", self.lport, self.rhost, self.rport)
    }
}

fn udp(lport: u16) -> Arc<UdpNio> {
    Arc::new(UdpNio {
        lport,
        rhost: "127.0.0.1".to_string(),
        rport: lport + 1,
    })
}

#[test]
fn two_port_wic_on_single_slot_adapter() {
    let mut adapter: Adapter<WicKind, Arc<UdpNio>> = Adapter::new(2, 1);
    assert!(adapter.port_exists(0));
    assert!(!adapter.port_exists(16));
    assert!(adapter.wic_slot_available(0).unwrap());

    adapter.install_wic(0, WicKind::Wic2T).unwrap();
    assert!(adapter.port_exists(16));
    assert!(adapter.port_exists(17));
    assert!(!adapter.port_exists(18));

    let nio = udp(10000);
    adapter.add_nio(16, Arc::clone(&nio)).unwrap();
    assert!(Arc::ptr_eq(adapter.get_nio(16).unwrap().unwrap(), &nio));

    adapter.remove_nio(16).unwrap();
    adapter.uninstall_wic(0).unwrap();
    assert!(!adapter.port_exists(16));

    // The caller still owns the NIO after the adapter forgets it.
    assert_eq!(Arc::strong_count(&nio), 1);
}

#[test]
fn wics_in_adjacent_slots_get_disjoint_ranges() {
    let mut adapter: Adapter<WicKind, Arc<UdpNio>> = Adapter::from_kind(AdapterKind::C2600Mb1Fe);
    adapter.install_wic(0, WicKind::Wic2T).unwrap();
    adapter.install_wic(1, WicKind::Wic2T).unwrap();

    let wic_ports: Vec<u32> = adapter.ports().keys().copied().filter(|&p| p >= 16).collect();
    assert_eq!(wic_ports, vec![16, 17, 32, 33]);
}

#[test]
fn shared_wic_handles_are_not_owned() {
    let wic = Arc::new(WicKind::Wic1Enet);
    let mut adapter: Adapter<Arc<WicKind>, Arc<UdpNio>> = Adapter::from_kind(AdapterKind::Gt96100Fe);

    adapter.install_wic(2, Arc::clone(&wic)).unwrap();
    assert_eq!(adapter.wic(2).unwrap().map(|w| w.interface_count()), Some(1));
    assert!(adapter.port_exists(48));

    let returned = adapter.uninstall_wic(2).unwrap();
    assert!(Arc::ptr_eq(&returned, &wic));
}

#[test]
fn failed_operations_leave_snapshot_unchanged() {
    let mut adapter: Adapter<WicKind, Arc<UdpNio>> = Adapter::from_kind(AdapterKind::C1700Mb1Fe);
    adapter.install_wic(0, WicKind::Wic1T).unwrap();
    adapter.add_nio(16, udp(20000)).unwrap();
    let before = adapter.snapshot();

    assert!(matches!(
        adapter.install_wic(0, WicKind::Wic2T),
        Err(Error::SlotOccupied { slot: 0 })
    ));
    assert!(matches!(
        adapter.install_wic(2, WicKind::Wic2T),
        Err(Error::SlotOutOfRange { slot: 2, wic_count: 2 })
    ));
    assert!(matches!(adapter.uninstall_wic(1), Err(Error::SlotEmpty { slot: 1 })));
    assert!(matches!(adapter.add_nio(32, udp(1)), Err(Error::PortNotFound { port: 32 })));
    assert!(matches!(
        adapter.bind_nio(16, udp(2), BindPolicy::Reject),
        Err(Error::PortAlreadyBound { port: 16 })
    ));

    assert_eq!(adapter.snapshot(), before);
}

#[test]
fn snapshot_serializes_to_camel_case_json() {
    let service: AdapterService<WicKind, Arc<UdpNio>> = AdapterService::new(
        Adapter::from_kind(AdapterKind::C2600Mb1E),
        BindPolicy::Replace,
    );
    service.install_wic(0, WicKind::Wic1T).unwrap();
    service.add_nio(16, udp(30000)).unwrap();

    let json = serde_json::to_value(service.snapshot()).unwrap();
    assert_eq!(json["kind"], "C2600-MB-1E");
    assert_eq!(json["removable"], false);
    assert_eq!(json["interfaceCount"], 1);
    assert_eq!(json["wicCount"], 3);
    assert_eq!(json["ports"][1]["port"], 16);
    assert_eq!(json["ports"][1]["wicSlot"], 0);
    assert_eq!(json["ports"][1]["nio"], "udp:30000->127.0.0.1:30001");
    assert_eq!(json["wicSlots"][0]["wic"], "WIC-1T");
    assert_eq!(json["wicSlots"][1]["firstPort"], 32);
}
