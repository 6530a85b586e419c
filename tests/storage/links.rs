//! Integration tests for single and multi links

use wingman_foundation::ErrorKind;
use wingman_storage::{MultiLink, SingleLink};

use crate::{Leg, Person, id, legs, people};

// =============================================================================
// Single Links
// =============================================================================

#[test]
fn single_link_resolves_target() {
    let store = people(&["P1"]);
    let person = Person::new("P1");
    let link = SingleLink::to(&person, &store).unwrap();
    assert_eq!(link.get(&store).unwrap(), &person);
}

#[test]
fn single_link_to_missing_item_is_broken() {
    let store = people(&["P1"]);
    let err = SingleLink::to(&Person::new("P2"), &store).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkBroken(_)));
}

#[test]
fn single_link_after_delete() {
    let mut store = people(&["P1", "P2"]);
    let mut link = SingleLink::to(&Person::new("P1"), &store).unwrap();

    store.remove(&id("P1")).unwrap();
    assert!(link.get_optional(&store).is_none());
    assert!(matches!(
        link.get(&store).unwrap_err().kind,
        ErrorKind::LinkBroken(_)
    ));

    link.set(&Person::new("P2"), &store).unwrap();
    assert_eq!(link.target_id(), &id("P2"));
}

// =============================================================================
// Multi Links
// =============================================================================

#[test]
fn link_then_unlink_restores_state() {
    let mut link: MultiLink<Leg, Person> = MultiLink::bounded(id("F1"), 2);
    let before = link.clone();

    link.link(&Person::new("P1"), None).unwrap();
    assert!(link.contains(&id("P1")));
    link.unlink(&Person::new("P1"), None);
    assert_eq!(link, before);
}

#[test]
fn reciprocal_is_kept_in_step() {
    let mut flight: MultiLink<Leg, Person> = MultiLink::unbounded(id("F1"));
    let mut pilot: MultiLink<Person, Leg> = MultiLink::single(id("P1"));

    flight.link(&Person::new("P1"), Some(&mut pilot)).unwrap();
    assert!(pilot.contains(&id("F1")));

    flight.unlink(&Person::new("P1"), Some(&mut pilot));
    assert!(!flight.contains(&id("P1")));
    assert!(!pilot.contains(&id("F1")));
}

#[test]
fn reading_repairs_missing_reciprocal() {
    let crew = people(&["P1"]);
    let mut flight: MultiLink<Leg, Person> = MultiLink::unbounded(id("F1"));
    let mut pilot: MultiLink<Person, Leg> = MultiLink::single(id("P1"));

    flight.link(&Person::new("P1"), None).unwrap();
    assert!(!pilot.contains(&id("F1")));

    let items = flight.items(&crew, Some(&mut pilot), true);
    assert_eq!(items.len(), 1);
    assert!(pilot.contains(&id("F1")));
}

#[test]
fn full_reciprocal_prunes_instead() {
    let crew = people(&["P1"]);
    let mut flight: MultiLink<Leg, Person> = MultiLink::unbounded(id("F1"));
    let mut pilot: MultiLink<Person, Leg> = MultiLink::single(id("P1"));
    pilot.link(&Leg::new("F0"), None).unwrap();

    flight.link(&Person::new("P1"), None).unwrap();
    let items = flight.items(&crew, Some(&mut pilot), true);
    assert!(items.is_empty());
    assert!(!flight.contains(&id("P1")));
    assert_eq!(pilot.edge().ids(), &[id("F0")]);
}

/// A plane linked to a flight that is then deleted reads back empty, and
/// the stale id is gone from the plane's edge.
#[test]
fn deleted_flight_is_pruned_from_plane() {
    let mut flights = legs(&["F1"]);
    let mut plane: MultiLink<Person, Leg> = MultiLink::unbounded(id("PL1"));
    plane.link(&Leg::new("F1"), None).unwrap();

    flights.remove(&id("F1")).unwrap();

    let items = plane.items(&flights, None, true);
    assert!(items.is_empty());
    assert!(!plane.edge().contains(&id("F1")));
}

#[test]
fn pruning_is_optional() {
    let mut flights = legs(&["F1", "F2"]);
    let mut plane: MultiLink<Person, Leg> = MultiLink::unbounded(id("PL1"));
    plane.link(&Leg::new("F1"), None).unwrap();
    plane.link(&Leg::new("F2"), None).unwrap();
    flights.remove(&id("F1")).unwrap();

    let first = plane.items(&flights, None, false);
    assert_eq!(first.len(), 1);
    assert_eq!(plane.edge().len(), 2);

    let second = plane.items(&flights, None, true);
    assert!(second.len() <= first.len());
    assert_eq!(plane.edge().ids(), &[id("F2")]);
}

#[test]
fn full_link_rejects_new_targets() {
    let mut link: MultiLink<Leg, Person> = MultiLink::bounded(id("F1"), 1);
    link.link(&Person::new("P1"), None).unwrap();
    link.link(&Person::new("P1"), None).unwrap();

    let err = link.link(&Person::new("P2"), None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkFull { capacity: 1 }));
}
