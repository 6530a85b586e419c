//! Integration tests for pilots, crew, and locations on flights

use wingman_foundation::ErrorKind;
use wingman_model::{FlightCrewType, FlightLocationType, FlightPilotType, Role};
use wingman_storage::ReadOnlyItemStore;

use crate::{fleet, id, ids};

// =============================================================================
// Pilots
// =============================================================================

#[test]
fn one_pilot_per_seat() {
    let mut model = fleet();
    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();

    let err = model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P2"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkFull { capacity: 1 }));

    model
        .link_pilot(&id("F1"), FlightPilotType::PilotMonitoring, &id("P2"))
        .unwrap();
    let flying = model
        .flight_pilots(&id("F1"), FlightPilotType::PilotFlying)
        .unwrap();
    assert_eq!(ids(&flying), vec![id("P1")]);
}

#[test]
fn pilot_sees_their_flights() {
    let mut model = fleet();
    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    model
        .link_pilot(&id("F2"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();

    let flights = model
        .pilot_flights(&id("P1"), FlightPilotType::PilotFlying)
        .unwrap();
    assert_eq!(ids(&flights), vec![id("F1"), id("F2")]);
    assert!(model
        .pilot_flights(&id("P1"), FlightPilotType::PilotMonitoring)
        .unwrap()
        .is_empty());
}

#[test]
fn availability_follows_links() {
    let mut model = fleet();
    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    assert!(!model.pilots().get(&id("P1")).unwrap().is_available());

    model
        .unlink_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    assert!(model.pilots().get(&id("P1")).unwrap().is_available());
}

#[test]
fn linking_missing_items_fails() {
    let mut model = fleet();
    let err = model
        .link_pilot(&id("F9"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));

    let err = model
        .link_crew(&id("F1"), FlightCrewType::FlightAttendant, &id("C9"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));
}

#[test]
fn never_added_flight_is_link_not_found() {
    let mut model = fleet();
    let err = model
        .flight_pilots(&id("F9"), FlightPilotType::PilotFlying)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkNotFound(_)));
}

#[test]
fn deleted_pilot_frees_the_seat() {
    let mut model = fleet();
    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    model.delete_pilot(&id("P1")).unwrap();

    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P2"))
        .unwrap();
    let flying = model
        .flight_pilots(&id("F1"), FlightPilotType::PilotFlying)
        .unwrap();
    assert_eq!(ids(&flying), vec![id("P2")]);
}

#[test]
fn deleted_flight_drops_out_of_pilot_view() {
    let mut model = fleet();
    model
        .link_pilot(&id("F1"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    model
        .link_pilot(&id("F2"), FlightPilotType::PilotFlying, &id("P1"))
        .unwrap();
    model.delete_flight(&id("F1")).unwrap();

    let flights = model
        .pilot_flights(&id("P1"), FlightPilotType::PilotFlying)
        .unwrap();
    assert_eq!(ids(&flights), vec![id("F2")]);
}

// =============================================================================
// Crew
// =============================================================================

#[test]
fn attendants_fill_at_four() {
    let mut model = fleet();
    let role = FlightCrewType::FlightAttendant;
    assert_eq!(role.capacity(), 4);

    for n in 1..=4 {
        model
            .link_crew(&id("F1"), role, &id(&format!("C{n}")))
            .unwrap();
    }
    let err = model.link_crew(&id("F1"), role, &id("C5")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkFull { capacity: 4 }));
    assert!(model.crew().get(&id("C5")).unwrap().is_available());

    let crew = model.flight_crew(&id("F1"), role).unwrap();
    assert_eq!(
        ids(&crew),
        vec![id("C1"), id("C2"), id("C3"), id("C4")]
    );
}

#[test]
fn crew_roles_are_separate() {
    let mut model = fleet();
    model
        .link_crew(&id("F1"), FlightCrewType::CabinServiceDirector, &id("C1"))
        .unwrap();
    model
        .link_crew(&id("F1"), FlightCrewType::SeniorFlightAttendant, &id("C2"))
        .unwrap();

    let flights = model
        .crew_flights(&id("C1"), FlightCrewType::CabinServiceDirector)
        .unwrap();
    assert_eq!(ids(&flights), vec![id("F1")]);
    assert!(model
        .crew_flights(&id("C1"), FlightCrewType::SeniorFlightAttendant)
        .unwrap()
        .is_empty());

    model
        .unlink_crew(&id("F1"), FlightCrewType::CabinServiceDirector, &id("C1"))
        .unwrap();
    assert!(model.crew().get(&id("C1")).unwrap().is_available());
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn one_departure_per_flight() {
    let mut model = fleet();
    model
        .link_location(&id("F1"), FlightLocationType::Departure, &id("L1"))
        .unwrap();
    model
        .link_location(&id("F1"), FlightLocationType::Arrival, &id("L2"))
        .unwrap();

    let err = model
        .link_location(&id("F1"), FlightLocationType::Departure, &id("L2"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkFull { capacity: 1 }));

    let departure = model
        .flight_location(&id("F1"), FlightLocationType::Departure)
        .unwrap()
        .map(|l| l.name().to_string());
    assert_eq!(departure.as_deref(), Some("Singapore"));
}

#[test]
fn locations_see_departing_and_arriving_flights() {
    let mut model = fleet();
    model
        .link_location(&id("F1"), FlightLocationType::Departure, &id("L1"))
        .unwrap();
    model
        .link_location(&id("F2"), FlightLocationType::Arrival, &id("L1"))
        .unwrap();

    let departing = model
        .location_flights(&id("L1"), FlightLocationType::Departure)
        .unwrap();
    assert_eq!(ids(&departing), vec![id("F1")]);
    let arriving = model
        .location_flights(&id("L1"), FlightLocationType::Arrival)
        .unwrap();
    assert_eq!(ids(&arriving), vec![id("F2")]);

    model
        .unlink_location(&id("F1"), FlightLocationType::Departure, &id("L1"))
        .unwrap();
    assert!(model
        .flight_location(&id("F1"), FlightLocationType::Departure)
        .unwrap()
        .is_none());
}
