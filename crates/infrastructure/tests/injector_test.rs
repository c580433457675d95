mod helpers;

use helpers::builders::glue_record;
use helpers::build_query;
use hickory_proto::rr::{DNSClass, RData, RecordType};
use std::net::Ipv4Addr;
use xpf_dns_domain::{AddressFamily, TransportEndpoint, XpfError, XpfRecordData};
use xpf_dns_infrastructure::dns::XpfRecordInjector;

fn endpoint() -> TransportEndpoint {
    TransportEndpoint::new(
        "192.0.2.1",
        "5353",
        "192.0.2.2",
        "53",
        AddressFamily::Ipv4,
        "udp",
    )
}

#[test]
fn test_appends_after_existing_records() {
    let injector = XpfRecordInjector::new(65422).unwrap();
    let mut message = build_query("example.com.");
    message.add_additional(glue_record("ns1.example.com.", Ipv4Addr::new(192, 0, 2, 10)));
    message.add_additional(glue_record("ns2.example.com.", Ipv4Addr::new(192, 0, 2, 11)));

    injector.append(&endpoint(), &mut message).unwrap();

    let additionals = message.additionals();
    assert_eq!(additionals.len(), 3);
    assert_eq!(additionals[0].record_type(), RecordType::A);
    assert_eq!(additionals[1].record_type(), RecordType::A);
    assert_eq!(u16::from(additionals[2].record_type()), 65422);
}

#[test]
fn test_does_not_deduplicate() {
    let injector = XpfRecordInjector::new(65422).unwrap();
    let mut message = build_query("example.com.");

    injector.append(&endpoint(), &mut message).unwrap();
    injector.append(&endpoint(), &mut message).unwrap();

    assert_eq!(message.additionals().len(), 2);
}

#[test]
fn test_other_sections_untouched() {
    let injector = XpfRecordInjector::new(65422).unwrap();
    let mut message = build_query("example.com.");
    let before = message.clone();

    injector.append(&endpoint(), &mut message).unwrap();

    assert_eq!(message.id(), before.id());
    assert_eq!(message.queries(), before.queries());
    assert!(message.answers().is_empty());
    assert!(message.name_servers().is_empty());
}

#[test]
fn test_rdata_is_encoded_xpf() {
    let injector = XpfRecordInjector::new(65422).unwrap();
    let record = injector.build_record(&endpoint()).unwrap();

    assert_eq!(record.dns_class(), DNSClass::IN);
    assert_eq!(record.ttl(), 0);

    match record.data() {
        RData::Unknown { rdata, .. } => {
            let bytes = rdata.anything();
            assert_eq!(bytes.len(), 14);
            let decoded = XpfRecordData::decode(bytes).unwrap();
            assert_eq!(decoded.src_port(), 5353);
            assert_eq!(decoded.dst_port(), 53);
        }
        other => panic!("Expected opaque RDATA, got {:?}", other),
    }
}

#[test]
fn test_bad_port_propagates() {
    let injector = XpfRecordInjector::new(65422).unwrap();
    let mut message = build_query("example.com.");
    let mut bad = endpoint();
    bad.src_port = "70000".to_string();

    let err = injector.append(&bad, &mut message).unwrap_err();

    assert!(matches!(err, XpfError::PortParse { .. }));
    assert!(message.additionals().is_empty());
}
