//! Capacity-bounded, duplicate-free, insertion-ordered edges of ids.

use std::collections::HashSet;

use wingman_foundation::{Error, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fill state of an edge relative to its capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeState {
    /// No ids.
    Empty,
    /// Some ids, room for more.
    Partial,
    /// At capacity; only already-present ids may be put.
    Full,
}

/// One endpoint of a relation for one owner: the ids it points at.
///
/// Ids are kept in insertion order with a set alongside for membership
/// checks. Invariants: no duplicate ids, and `len() <= capacity` whenever a
/// capacity is set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EdgeData", into = "EdgeData"))]
pub struct LinkEdge {
    /// Maximum number of ids; `None` is unbounded.
    capacity: Option<usize>,
    /// Ids in insertion order.
    ids: Vec<ItemId>,
    /// Same ids as `ids`, for duplicate checks.
    members: HashSet<ItemId>,
}

impl LinkEdge {
    /// Creates an empty edge.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            ids: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Creates an empty edge holding at most one id.
    #[must_use]
    pub fn single() -> Self {
        Self::new(Some(1))
    }

    /// Creates an empty edge holding at most `capacity` ids.
    #[must_use]
    pub fn bounded(capacity: usize) -> Self {
        Self::new(Some(capacity))
    }

    /// Creates an empty edge with no capacity limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Creates an edge from existing ids.
    ///
    /// Duplicates are dropped, and ids beyond the capacity are discarded.
    #[must_use]
    pub fn with_ids(capacity: Option<usize>, ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut edge = Self::new(capacity);
        for id in ids {
            if edge.put(id.clone()).is_err() {
                tracing::warn!(
                    target: "wingman::link",
                    id = %id,
                    capacity = edge.capacity(),
                    "Discarding id beyond edge capacity"
                );
            }
        }
        edge
    }

    /// Returns true if this edge has a capacity limit.
    #[must_use]
    pub fn has_capacity(&self) -> bool {
        self.capacity.is_some()
    }

    /// Returns the capacity, or `usize::MAX` for an unbounded edge.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(usize::MAX)
    }

    /// Returns the number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the edge is at capacity. Unbounded edges never are.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|capacity| self.ids.len() >= capacity)
    }

    /// Returns true if the edge holds no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the fill state of the edge.
    #[must_use]
    pub fn state(&self) -> EdgeState {
        if self.is_full() {
            EdgeState::Full
        } else if self.is_empty() {
            EdgeState::Empty
        } else {
            EdgeState::Partial
        }
    }

    /// Returns true if the id is in the edge.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.members.contains(id)
    }

    /// Returns the ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Returns the id at a position in insertion order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ItemId> {
        self.ids.get(position)
    }

    /// Adds an id at the end of the edge.
    ///
    /// Putting an id that is already present is a no-op, even when the edge
    /// is full.
    ///
    /// # Errors
    ///
    /// Returns `LinkFull` if the id is new and the edge is at capacity.
    pub fn put(&mut self, id: ItemId) -> Result<()> {
        if self.members.contains(&id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(Error::link_full(self.capacity()));
        }
        self.members.insert(id.clone());
        self.ids.push(id);
        Ok(())
    }

    /// Removes an id. Returns true if it was present.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        if !self.members.remove(id) {
            return false;
        }
        self.ids.retain(|existing| existing != id);
        true
    }

    /// Removes every id.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.members.clear();
    }
}

/// Serialized form of an edge; the member set is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EdgeData {
    capacity: Option<usize>,
    ids: Vec<ItemId>,
}

#[cfg(feature = "serde")]
impl From<EdgeData> for LinkEdge {
    fn from(data: EdgeData) -> Self {
        Self::with_ids(data.capacity, data.ids)
    }
}

#[cfg(feature = "serde")]
impl From<LinkEdge> for EdgeData {
    fn from(edge: LinkEdge) -> Self {
        Self {
            capacity: edge.capacity,
            ids: edge.ids,
        }
    }
}
