#![cfg(feature = "derive")]

use hashcode::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, StableId)]
enum NodeKind {
    #[id = "chance"]
    Chance,
    #[id = "decision"]
    Decision,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, StableId)]
enum Single {
    // Hashes to i32::MIN
    #[id = "polygenelubricants"]
    Only,
}

const CHANCE_ID: i32 = hash_code!("chance");

#[test]
fn test_ids_are_string_hashes() {
    assert_eq!(NodeKind::Chance.stable_id(), string_hash("chance"));
    assert_eq!(NodeKind::Decision.stable_id(), string_hash("decision"));
    assert_eq!(NodeKind::Utility.stable_id(), string_hash("Utility"));
}

#[test]
fn test_hash_code_macro() {
    assert_eq!(hash_code!(""), 0);
    assert_eq!(hash_code!("a"), 97);
    assert_eq!(hash_code!("ab"), 3105);
    assert_eq!(hash_code!("hello"), 99162322);
    assert_eq!(hash_code!("polygenelubricants"), i32::MIN);
    assert_eq!(hash_code!("\u{1F600}"), 0x1F600);
    assert_eq!(CHANCE_ID, NodeKind::Chance.stable_id());
}

#[test]
fn test_round_trip() {
    for kind in [NodeKind::Chance, NodeKind::Decision, NodeKind::Utility] {
        assert_eq!(NodeKind::from_stable_id(kind.stable_id()), Some(kind));
    }
    assert_eq!(NodeKind::from_stable_id(string_hash("unknown")), None);
}

#[test]
fn test_negative_id() {
    assert_eq!(Single::Only.stable_id(), i32::MIN);
    assert_eq!(Single::from_stable_id(i32::MIN), Some(Single::Only));
}

#[test]
fn test_ids_and_names_tables() {
    assert_eq!(
        NodeKind::IDS,
        &[
            string_hash("chance"),
            string_hash("decision"),
            string_hash("Utility")
        ]
    );
    assert_eq!(NodeKind::NAMES, &["chance", "decision", "Utility"]);
    assert_eq!(NodeKind::Utility.id_name(), "Utility");
    assert_eq!(NodeKind::name_of(string_hash("decision")), Some("decision"));
}
