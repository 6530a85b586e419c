//! Integration tests for item identifiers

use std::collections::HashSet;

use wingman_foundation::ItemId;

#[test]
fn ids_compare_by_value() {
    assert_eq!(ItemId::from("F1"), ItemId::new("F1".to_string()));
    assert_ne!(ItemId::from("F1"), ItemId::from("f1"));
}

#[test]
fn random_ids_are_distinct() {
    let ids: HashSet<ItemId> = (0..100).map(|_| ItemId::random()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn display_is_the_raw_string() {
    let id = ItemId::from("PL1");
    assert_eq!(id.to_string(), "PL1");
    assert_eq!(id.as_str(), "PL1");
    assert_eq!(format!("{id:?}"), "ItemId(PL1)");
}

#[test]
fn ids_can_be_looked_up_by_str() {
    let ids: HashSet<ItemId> = ["P1", "P2"].into_iter().map(ItemId::from).collect();
    assert!(ids.contains("P1"));
    assert!(!ids.contains("P3"));
}
