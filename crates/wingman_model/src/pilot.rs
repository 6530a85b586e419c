//! Pilots and the roles they fill on a flight.

use std::fmt;
use std::str::FromStr;

use wingman_foundation::{Error, Item, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::{Role, parse_keyword};

/// Seniority of a pilot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PilotRank {
    /// Still in training.
    Trainee,
    /// Second officer.
    SecondOfficer,
    /// First officer.
    FirstOfficer,
    /// Captain.
    Captain,
    /// Senior captain.
    SeniorCaptain,
}

impl PilotRank {
    /// Every rank, lowest first.
    pub const ALL: &'static [Self] = &[
        Self::Trainee,
        Self::SecondOfficer,
        Self::FirstOfficer,
        Self::Captain,
        Self::SeniorCaptain,
    ];

    /// Word used for the rank in commands.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Trainee => "trainee",
            Self::SecondOfficer => "second-officer",
            Self::FirstOfficer => "first-officer",
            Self::Captain => "captain",
            Self::SeniorCaptain => "senior-captain",
        }
    }
}

impl fmt::Display for PilotRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trainee => "Trainee",
            Self::SecondOfficer => "Second Officer",
            Self::FirstOfficer => "First Officer",
            Self::Captain => "Captain",
            Self::SeniorCaptain => "Senior Captain",
        };
        f.write_str(name)
    }
}

impl FromStr for PilotRank {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_keyword(input, Self::ALL, Self::keyword, "pilot rank")
    }
}

/// Seat a pilot takes on a flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightPilotType {
    /// The pilot at the controls.
    PilotFlying,
    /// The pilot monitoring the flight.
    PilotMonitoring,
}

impl Role for FlightPilotType {
    const ALL: &'static [Self] = &[Self::PilotFlying, Self::PilotMonitoring];

    fn keyword(self) -> &'static str {
        match self {
            Self::PilotFlying => "flying",
            Self::PilotMonitoring => "monitoring",
        }
    }

    fn relation(self) -> &'static str {
        match self {
            Self::PilotFlying => "pilotFlying",
            Self::PilotMonitoring => "pilotMonitoring",
        }
    }

    fn reverse(self) -> &'static str {
        match self {
            Self::PilotFlying => "flightsAsPilotFlying",
            Self::PilotMonitoring => "flightsAsPilotMonitoring",
        }
    }

    fn capacity(self) -> usize {
        1
    }
}

impl fmt::Display for FlightPilotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PilotFlying => "Pilot Flying",
            Self::PilotMonitoring => "Pilot Monitoring",
        })
    }
}

/// A pilot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pilot {
    id: ItemId,
    name: String,
    rank: PilotRank,
    age: u32,
    flight_hours: u32,
    available: bool,
}

impl Pilot {
    /// Creates an available pilot with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, rank: PilotRank, age: u32, flight_hours: u32) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
            rank,
            age,
            flight_hours,
            available: true,
        }
    }

    /// Replaces the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rank.
    #[must_use]
    pub fn rank(&self) -> PilotRank {
        self.rank
    }

    /// Returns the age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the logged flight hours.
    #[must_use]
    pub fn flight_hours(&self) -> u32 {
        self.flight_hours
    }

    /// Returns true if the pilot is free to be assigned.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the pilot available or not.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Item for Pilot {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("Rank: {}", self.rank),
            format!("Age: {}", self.age),
            format!("Flight hours: {}", self.flight_hours),
            format!("Status: {}", availability(self.available)),
        ]
    }
}

impl fmt::Display for Pilot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rank)
    }
}

pub(crate) fn availability(available: bool) -> &'static str {
    if available { "Available" } else { "Unavailable" }
}
