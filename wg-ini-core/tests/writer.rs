use pretty_assertions::assert_eq;
use wg_ini_core::{parse, write, write_file, ConfigDocument, Section};

#[test]
fn write_separates_sections_with_blank_line() {
    let doc = ConfigDocument::new(
        Section::new("Interface", "PrivateKey = A\nDNS = 10.0.0.1"),
        Section::new("Peer", "PublicKey = B"),
    );

    assert_eq!(
        write(&doc),
        "[Interface]\nPrivateKey = A\nDNS = 10.0.0.1\n\n[Peer]\nPublicKey = B\n"
    );
}

#[test]
fn written_text_splits_back_into_the_same_sections() {
    let mut interface = Section::new("Interface", "Address = 10.0.0.2/32");
    interface.push_entry("PostUp", "echo up");
    let doc = ConfigDocument::new(interface, Section::new("Peer", "Endpoint = 1.2.3.4:51820"));

    assert_eq!(parse(&write(&doc)), doc);
}

#[test]
fn write_file_replaces_existing_content() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("out.conf");
    std::fs::write(&path, "stale content that is much longer than the new one").expect("seed");

    let doc = ConfigDocument::new(Section::empty("Interface"), Section::empty("Peer"));
    write_file(&doc, &path).expect("write_file should succeed");

    assert_eq!(
        std::fs::read_to_string(&path).expect("read back"),
        "[Interface]\n\n[Peer]\n"
    );
}
