//! Integration tests for plane assignment

use wingman_foundation::{ErrorKind, Item};
use wingman_storage::ReadOnlyItemStore;

use crate::{fleet, id, ids};

#[test]
fn assign_links_both_ways() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();

    let plane = model.flight_plane(&id("F1")).unwrap().map(|p| p.id().clone());
    assert_eq!(plane, Some(id("PL1")));
    let flights = model.plane_flights(&id("PL1"), true).unwrap();
    assert_eq!(ids(&flights), vec![id("F1")]);
    assert!(!model.planes().get(&id("PL1")).unwrap().is_available());
}

#[test]
fn reassigning_moves_the_flight() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();
    model.assign_plane(&id("PL2"), &id("F1")).unwrap();

    assert!(model.plane_flights(&id("PL1"), true).unwrap().is_empty());
    let flights = model.plane_flights(&id("PL2"), true).unwrap();
    assert_eq!(ids(&flights), vec![id("F1")]);
}

#[test]
fn unassign_frees_the_plane_when_idle() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();
    model.assign_plane(&id("PL1"), &id("F2")).unwrap();

    model.unassign_plane(&id("PL1"), &id("F1")).unwrap();
    assert!(!model.planes().get(&id("PL1")).unwrap().is_available());
    assert!(model.flight_plane(&id("F1")).unwrap().is_none());

    model.unassign_plane(&id("PL1"), &id("F2")).unwrap();
    assert!(model.planes().get(&id("PL1")).unwrap().is_available());
}

/// A plane whose flight was deleted reads back with no flights, and the
/// stale id is gone from its link.
#[test]
fn deleted_flight_is_pruned_from_plane() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();
    model.delete_flight(&id("F1")).unwrap();

    assert!(model.plane_flights(&id("PL1"), true).unwrap().is_empty());
    let plane = model.planes().get(&id("PL1")).unwrap();
    assert!(!plane.flights().contains(&id("F1")));
}

#[test]
fn keeping_stale_ids_on_request() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();
    model.delete_flight(&id("F1")).unwrap();

    assert!(model.plane_flights(&id("PL1"), false).unwrap().is_empty());
    let plane = model.planes().get(&id("PL1")).unwrap();
    assert!(plane.flights().contains(&id("F1")));
}

#[test]
fn deleted_plane_is_cleared_from_flight() {
    let mut model = fleet();
    model.assign_plane(&id("PL1"), &id("F1")).unwrap();
    model.delete_plane(&id("PL1")).unwrap();

    assert!(model.flight_plane(&id("F1")).unwrap().is_none());
    assert!(model.flights().get(&id("F1")).unwrap().plane().is_none());
}

#[test]
fn assigning_missing_items_fails() {
    let mut model = fleet();
    let err = model.assign_plane(&id("PL9"), &id("F1")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));
    let err = model.assign_plane(&id("PL1"), &id("F9")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));
}
