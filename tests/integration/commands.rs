//! Integration tests for the command layer

use wingman_foundation::ErrorKind;

use crate::session_with;

fn roster() -> wingman_runtime::Session {
    session_with(&[
        "add pilot \"Amelia Earhart\" captain 39 12000",
        "add pilot \"Bert Hinkler\" first-officer 30 900",
        "add crew Sam cabin-service-director",
        "add crew Alex flight-attendant",
        "add plane A380 3",
        "add flight SQ25",
        "add location Singapore",
        "add location Sydney",
    ])
}

#[test]
fn full_crewing_of_a_flight() {
    let mut session = roster();
    for line in [
        "link pilot 1 flight 1 as flying",
        "link pilot 2 flight 1 as monitoring",
        "link crew 1 flight 1 as cabin-service-director",
        "link crew 2 flight 1 as flight-attendant",
        "link plane 1 flight 1",
        "link location 1 flight 1 as departure",
        "link location 2 flight 1 as arrival",
    ] {
        session.eval(line).unwrap();
    }

    let shown = session.eval("show flight 1").unwrap().message;
    for expected in [
        "SQ25",
        "Plane: A380 (Age: 3)",
        "Departure: Singapore",
        "Arrival: Sydney",
        "Pilot Flying: Amelia Earhart (Captain)",
        "Pilot Monitoring: Bert Hinkler (First Officer)",
        "Cabin Service Director: Sam (Cabin Service Director)",
    ] {
        assert!(shown.contains(expected), "missing {expected:?} in:\n{shown}");
    }

    let pilots = session.eval("list pilots").unwrap().message;
    assert!(pilots.contains("Status: Unavailable"));
}

#[test]
fn seat_taken_reports_link_error() {
    let mut session = roster();
    session.eval("link pilot 1 flight 1 as flying").unwrap();

    let err = session.eval("link pilot 2 flight 1 as flying").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CommandFailed(_)));
    assert_eq!(err.to_string(), "cannot link: link is full (capacity 1)");
}

#[test]
fn delete_then_show_self_heals() {
    let mut session = roster();
    session.eval("link pilot 1 flight 1 as flying").unwrap();
    session.eval("delete pilot 1").unwrap();

    let shown = session.eval("show flight 1").unwrap().message;
    assert!(shown.contains("Pilot Flying: none"), "{shown}");

    // Position 1 is now Bert, who can take the freed seat
    session.eval("link pilot 1 flight 1 as flying").unwrap();
    let shown = session.eval("show flight 1").unwrap().message;
    assert!(shown.contains("Pilot Flying: Bert Hinkler"), "{shown}");
}

#[test]
fn unlink_restores_availability() {
    let mut session = roster();
    session.eval("link crew 2 flight 1 as flight-attendant").unwrap();
    session.eval("unlink crew 2 flight 1 as flight-attendant").unwrap();

    let shown = session.eval("show crew 2").unwrap().message;
    assert!(shown.contains("Status: Available"), "{shown}");
}

#[test]
fn stations_show_on_both_sides() {
    let mut session = roster();
    session.eval("link pilot 1 location 2").unwrap();
    session.eval("link crew 1 location 2").unwrap();

    let pilot = session.eval("show pilot 1").unwrap().message;
    assert!(pilot.contains("Station: Sydney"), "{pilot}");

    let location = session.eval("show location 2").unwrap().message;
    assert!(location.contains("Stationed pilots: Amelia Earhart (Captain)"), "{location}");
    assert!(location.contains("Stationed crew: Sam (Cabin Service Director)"), "{location}");

    session.eval("unlink pilot 1 location 2").unwrap();
    let pilot = session.eval("show pilot 1").unwrap().message;
    assert!(pilot.contains("Station: none"), "{pilot}");
}

#[test]
fn malformed_commands_are_parse_errors() {
    let mut session = roster();
    for line in [
        "link pilot one flight 1 as flying",
        "link pilot 1 flight 1 as pilot",
        "add pilot Amelia admiral 39 12000",
        "show",
    ] {
        let err = session.eval(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ParseError(_)), "{line}: {err}");
    }
}
