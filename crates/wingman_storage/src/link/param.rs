//! Declarations of one side of a relation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::edge::LinkEdge;

/// Name and capacity of one side of a relation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkParam {
    /// Relation name as seen from this side (e.g., `pilotFlying`).
    pub name: String,
    /// Maximum number of ids per edge; `None` is unbounded.
    pub capacity: Option<usize>,
}

impl LinkParam {
    /// Creates a new relation side.
    #[must_use]
    pub fn new(name: impl Into<String>, capacity: Option<usize>) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// A side holding at most one id.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, Some(1))
    }

    /// A side holding at most `capacity` ids.
    #[must_use]
    pub fn bounded(name: impl Into<String>, capacity: usize) -> Self {
        Self::new(name, Some(capacity))
    }

    /// A side with no capacity limit.
    #[must_use]
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Builds an empty edge with this side's capacity.
    #[must_use]
    pub fn edge(&self) -> LinkEdge {
        LinkEdge::new(self.capacity)
    }
}
