//! Locations: airports flights run between and crew are stationed at.

use std::fmt;

use wingman_foundation::{Item, ItemId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// End of a flight a location serves as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlightLocationType {
    /// Where the flight leaves from.
    Departure,
    /// Where the flight lands.
    Arrival,
}

impl Role for FlightLocationType {
    const ALL: &'static [Self] = &[Self::Departure, Self::Arrival];

    fn keyword(self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Arrival => "arrival",
        }
    }

    fn relation(self) -> &'static str {
        self.keyword()
    }

    fn reverse(self) -> &'static str {
        match self {
            Self::Departure => "departingFlights",
            Self::Arrival => "arrivingFlights",
        }
    }

    fn capacity(self) -> usize {
        1
    }
}

impl fmt::Display for FlightLocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Departure => "Departure",
            Self::Arrival => "Arrival",
        })
    }
}

/// A location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    id: ItemId,
    name: String,
}

impl Location {
    /// Creates a location with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::random(),
            name: name.into(),
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
}

impl Item for Location {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
