//! Integration tests for Layer 2: Model
//!
//! Tests for flight roles, stations, plane assignment, and self-healing
//! links after deletes.

mod flights;
mod planes;

use wingman_foundation::{Item, ItemId};
use wingman_model::{Crew, CrewRank, Flight, Location, Model, Pilot, PilotRank, Plane};

pub fn id(raw: &str) -> ItemId {
    ItemId::from(raw)
}

pub fn ids<T: Item>(items: &[&T]) -> Vec<ItemId> {
    items.iter().map(|item| item.id().clone()).collect()
}

/// Two flights, three pilots, six attendants, two planes, two locations.
pub fn fleet() -> Model {
    let mut model = Model::new();
    for (n, code) in ["SQ25", "SQ26"].iter().enumerate() {
        model
            .add_flight(Flight::new(*code).with_id(format!("F{}", n + 1)))
            .unwrap();
    }
    for (n, rank) in [PilotRank::Captain, PilotRank::FirstOfficer, PilotRank::SecondOfficer]
        .into_iter()
        .enumerate()
    {
        model
            .add_pilot(Pilot::new(format!("Pilot {n}"), rank, 30 + n as u32, 1_000).with_id(format!("P{}", n + 1)))
            .unwrap();
    }
    for n in 1..=6 {
        model
            .add_crew(Crew::new(format!("Crew {n}"), CrewRank::FlightAttendant).with_id(format!("C{n}")))
            .unwrap();
    }
    model.add_plane(Plane::new("A380", 3).with_id("PL1")).unwrap();
    model.add_plane(Plane::new("B787", 5).with_id("PL2")).unwrap();
    model
        .add_location(Location::new("Singapore").with_id("L1"))
        .unwrap();
    model
        .add_location(Location::new("Sydney").with_id("L2"))
        .unwrap();
    model
}
