use std::path::PathBuf;

use pretty_assertions::assert_eq;
use wg_ini_core::{parse_file, ParseError};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn parses_interface_and_peer_sections() {
    let doc = parse_file(&fixture("fixtures/wg0.conf")).expect("parse should succeed");

    let interface = doc.interface.expect("interface should exist");
    assert_eq!(interface.get("PrivateKey"), Some("A"));
    assert_eq!(interface.get("Address"), Some("10.0.0.2/32"));
    assert_eq!(interface.get("DNS"), Some("10.0.0.1"));

    let peer = doc.peer.expect("peer should exist");
    assert_eq!(peer.get("PublicKey"), Some("B"));
    assert_eq!(peer.get("Endpoint"), Some("1.2.3.4:51820"));
    assert_eq!(peer.get("AllowedIPs"), Some("0.0.0.0/0, ::/0"));
}

#[test]
fn preamble_before_interface_is_dropped_and_values_are_trimmed() {
    let doc = parse_file(&fixture("fixtures/multi-peer.conf")).expect("parse should succeed");

    let interface = doc.interface.expect("interface should exist");
    assert!(!interface.body.contains("exported by provider"));
    assert_eq!(interface.get("DNS"), Some("10.8.0.1"));

    let peer = doc.peer.expect("peer should exist");
    let keys: Vec<&str> = peer
        .entries()
        .filter(|(key, _)| *key == "PublicKey")
        .map(|(_, value)| value)
        .collect();
    assert_eq!(keys, vec!["B", "C"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file(&fixture("fixtures/does-not-exist.conf")).expect_err("should fail");
    assert!(matches!(err, ParseError::Io(_)));
}
