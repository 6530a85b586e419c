//! Cabin crew and the roles they fill on a flight.

use std::fmt;
use std::str::FromStr;

use wingman_foundation::{Error, Item, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pilot::availability;
use crate::role::{Role, parse_keyword};

/// Seniority of a crew member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrewRank {
    /// Attendant in training.
    TraineeFlightAttendant,
    /// Flight attendant.
    FlightAttendant,
    /// Senior flight attendant.
    SeniorFlightAttendant,
    /// Leads the cabin.
    CabinServiceDirector,
}

impl CrewRank {
    /// Every rank, lowest first.
    pub const ALL: &'static [Self] = &[
        Self::TraineeFlightAttendant,
        Self::FlightAttendant,
        Self::SeniorFlightAttendant,
        Self::CabinServiceDirector,
    ];

    /// Word used for the rank in commands.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::TraineeFlightAttendant => "trainee-flight-attendant",
            Self::FlightAttendant => "flight-attendant",
            Self::SeniorFlightAttendant => "senior-flight-attendant",
            Self::CabinServiceDirector => "cabin-service-director",
        }
    }
}

impl fmt::Display for CrewRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TraineeFlightAttendant => "Trainee Flight Attendant",
            Self::FlightAttendant => "Flight Attendant",
            Self::SeniorFlightAttendant => "Senior Flight Attendant",
            Self::CabinServiceDirector => "Cabin Service Director",
        })
    }
}

impl FromStr for CrewRank {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_keyword(input, Self::ALL, Self::keyword, "crew rank")
    }
}

/// Position a crew member takes on a flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightCrewType {
    /// Leads the cabin; one per flight.
    CabinServiceDirector,
    /// One per flight.
    SeniorFlightAttendant,
    /// Up to four per flight.
    FlightAttendant,
    /// One per flight.
    TraineeFlightAttendant,
}

impl Role for FlightCrewType {
    const ALL: &'static [Self] = &[
        Self::CabinServiceDirector,
        Self::SeniorFlightAttendant,
        Self::FlightAttendant,
        Self::TraineeFlightAttendant,
    ];

    fn keyword(self) -> &'static str {
        match self {
            Self::CabinServiceDirector => "cabin-service-director",
            Self::SeniorFlightAttendant => "senior-flight-attendant",
            Self::FlightAttendant => "flight-attendant",
            Self::TraineeFlightAttendant => "trainee-flight-attendant",
        }
    }

    fn relation(self) -> &'static str {
        match self {
            Self::CabinServiceDirector => "cabinServiceDirector",
            Self::SeniorFlightAttendant => "seniorFlightAttendant",
            Self::FlightAttendant => "flightAttendant",
            Self::TraineeFlightAttendant => "traineeFlightAttendant",
        }
    }

    fn reverse(self) -> &'static str {
        match self {
            Self::CabinServiceDirector => "flightsAsCabinServiceDirector",
            Self::SeniorFlightAttendant => "flightsAsSeniorFlightAttendant",
            Self::FlightAttendant => "flightsAsFlightAttendant",
            Self::TraineeFlightAttendant => "flightsAsTraineeFlightAttendant",
        }
    }

    fn capacity(self) -> usize {
        match self {
            Self::FlightAttendant => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for FlightCrewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CabinServiceDirector => "Cabin Service Director",
            Self::SeniorFlightAttendant => "Senior Flight Attendant",
            Self::FlightAttendant => "Flight Attendant",
            Self::TraineeFlightAttendant => "Trainee Flight Attendant",
        })
    }
}

/// A cabin crew member.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Crew {
    id: ItemId,
    name: String,
    rank: CrewRank,
    available: bool,
}

impl Crew {
    /// Creates an available crew member with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, rank: CrewRank) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
            rank,
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
    pub fn rank(&self) -> CrewRank {
        self.rank
    }

    /// Returns true if the crew member is free to be assigned.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the crew member available or not.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Item for Crew {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("Rank: {}", self.rank),
            format!("Status: {}", availability(self.available)),
        ]
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rank)
    }
}
