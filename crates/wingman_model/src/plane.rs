//! Planes and the flights they are assigned to.

use std::fmt;

use wingman_foundation::{Item, ItemId};
use wingman_storage::MultiLink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flight::Flight;
use crate::pilot::availability;

/// A plane.
///
/// The plane owns the link to its flights. Each flight points back with a
/// single link; the two are kept in step by the model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    id: ItemId,
    model: String,
    age: u32,
    available: bool,
    flights: MultiLink<Plane, Flight>,
}

impl Plane {
    /// Creates an available plane with a fresh id and no flights.
    #[must_use]
    pub fn new(model: impl Into<String>, age: u32) -> Self {
        let id = ItemId::random();
        Self {
            flights: MultiLink::unbounded(id.clone()),
            id,
            model: model.into(),
            age,
            available: true,
        }
    }

    /// Replaces the id. Flights already linked are kept.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self.flights = MultiLink::with_edge(self.id.clone(), self.flights.edge().clone());
        self
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns true if the plane is free to be assigned.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the plane available or not.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Returns the link to this plane's flights.
    #[must_use]
    pub fn flights(&self) -> &MultiLink<Plane, Flight> {
        &self.flights
    }

    /// Returns the link to this plane's flights for changes.
    pub fn flights_mut(&mut self) -> &mut MultiLink<Plane, Flight> {
        &mut self.flights
    }
}

impl Item for Plane {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![
            self.model.clone(),
            format!("Age: {}", self.age),
            format!("Status: {}", availability(self.available)),
        ]
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Age: {})", self.model, self.age)
    }
}
