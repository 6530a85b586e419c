//! Flights.

use std::fmt;

use wingman_foundation::{Item, ItemId};
use wingman_storage::SingleLink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::plane::Plane;

/// A flight.
///
/// Pilots, crew and locations are linked to flights through the model's
/// registries. The plane is linked here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flight {
    id: ItemId,
    code: String,
    plane: Option<SingleLink<Plane>>,
}

impl Flight {
    /// Creates a flight with a fresh id and no plane.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            id: ItemId::random(),
            code: code.into(),
            plane: None,
        }
    }

    /// Replaces the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the flight code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the link to the assigned plane, if any.
    #[must_use]
    pub fn plane(&self) -> Option<&SingleLink<Plane>> {
        self.plane.as_ref()
    }

    /// Sets or clears the plane link.
    pub fn set_plane(&mut self, plane: Option<SingleLink<Plane>>) {
        self.plane = plane;
    }
}

impl Item for Flight {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![self.code.clone()]
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
