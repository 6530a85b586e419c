//! Owner-scoped links to many items, with reciprocal repair on read.

use std::fmt;
use std::marker::PhantomData;

use wingman_foundation::{Item, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::edge::LinkEdge;
use crate::store::ReadOnlyItemStore;

/// Links from one owner of type `S` to many items of type `T`.
///
/// The ids live in a [`LinkEdge`] and may be bounded. The reciprocal
/// `MultiLink<T, S>` held by a target should point back at the owner, but
/// that is only restored when the link is read through [`stream`](Self::stream)
/// with the reciprocal supplied.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct MultiLink<S, T> {
    owner: ItemId,
    edge: LinkEdge,
    #[cfg_attr(feature = "serde", serde(skip))]
    _types: PhantomData<fn() -> (S, T)>,
}

impl<S: Item, T: Item> MultiLink<S, T> {
    /// Creates an empty link for an owner.
    #[must_use]
    pub fn new(owner: ItemId, capacity: Option<usize>) -> Self {
        Self::with_edge(owner, LinkEdge::new(capacity))
    }

    /// Creates an empty link holding at most one id.
    #[must_use]
    pub fn single(owner: ItemId) -> Self {
        Self::new(owner, Some(1))
    }

    /// Creates an empty link holding at most `capacity` ids.
    #[must_use]
    pub fn bounded(owner: ItemId, capacity: usize) -> Self {
        Self::new(owner, Some(capacity))
    }

    /// Creates an empty link with no capacity limit.
    #[must_use]
    pub fn unbounded(owner: ItemId) -> Self {
        Self::new(owner, None)
    }

    /// Creates a link over an existing edge.
    #[must_use]
    pub fn with_edge(owner: ItemId, edge: LinkEdge) -> Self {
        Self {
            owner,
            edge,
            _types: PhantomData,
        }
    }

    /// Returns the owner's id.
    #[must_use]
    pub fn owner(&self) -> &ItemId {
        &self.owner
    }

    /// Returns the underlying edge.
    #[must_use]
    pub fn edge(&self) -> &LinkEdge {
        &self.edge
    }

    /// Returns true if the id is linked.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.edge.contains(id)
    }

    /// Links a target.
    ///
    /// Linking an already-linked target is a no-op on this side. When a
    /// reciprocal is supplied the owner's id is put into it as well; that
    /// second insertion is not atomic with the first, so if it fails the
    /// target stays linked here and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `LinkFull` if this edge, or the reciprocal edge, is at
    /// capacity and does not already hold the id.
    pub fn link(&mut self, target: &T, reciprocal: Option<&mut MultiLink<T, S>>) -> Result<()> {
        self.edge.put(target.id().clone())?;
        if let Some(reciprocal) = reciprocal {
            reciprocal.edge.put(self.owner.clone())?;
        }
        Ok(())
    }

    /// Unlinks a target, and the owner from the reciprocal if supplied.
    ///
    /// Unlinking a target that is not linked is a no-op.
    pub fn unlink(&mut self, target: &T, reciprocal: Option<&mut MultiLink<T, S>>) {
        self.unlink_id(target.id());
        if let Some(reciprocal) = reciprocal {
            reciprocal.unlink_id(&self.owner);
        }
    }

    /// Unlinks an id directly. Returns true if it was linked.
    pub fn unlink_id(&mut self, id: &ItemId) -> bool {
        self.edge.remove(id)
    }

    /// Unlinks everything.
    pub fn clear(&mut self) {
        self.edge.clear();
    }

    /// Resolves linked items lazily, in link order.
    ///
    /// Ids whose item is gone from `store` are skipped and collected as
    /// invalid. When a reciprocal is supplied, the owner's id is put into it
    /// for every resolved item; if the reciprocal is full the item is
    /// skipped and collected as invalid instead. With `remove_invalid`, the
    /// collected ids are removed from this link when the iterator is dropped.
    pub fn stream<'a, 's, St>(
        &'a mut self,
        store: &'s St,
        reciprocal: Option<&'a mut MultiLink<T, S>>,
        remove_invalid: bool,
    ) -> LinkedItems<'a, 's, S, T, St>
    where
        St: ReadOnlyItemStore<T> + ?Sized,
    {
        LinkedItems {
            link: self,
            store,
            reciprocal,
            remove_invalid,
            position: 0,
            invalid: Vec::new(),
        }
    }

    /// Collects [`stream`](Self::stream) into a list.
    pub fn items<'s, St>(
        &mut self,
        store: &'s St,
        reciprocal: Option<&mut MultiLink<T, S>>,
        remove_invalid: bool,
    ) -> Vec<&'s T>
    where
        St: ReadOnlyItemStore<T> + ?Sized,
    {
        self.stream(store, reciprocal, remove_invalid).collect()
    }
}

impl<S, T> Clone for MultiLink<S, T> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            edge: self.edge.clone(),
            _types: PhantomData,
        }
    }
}

impl<S, T> PartialEq for MultiLink<S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.edge == other.edge
    }
}

impl<S, T> fmt::Debug for MultiLink<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiLink")
            .field("owner", &self.owner)
            .field("ids", &self.edge.ids())
            .finish()
    }
}

/// Iterator over the items of a [`MultiLink`].
///
/// Single pass; pruning of invalid ids happens on drop, so it covers the ids
/// visited before the iterator was dropped.
pub struct LinkedItems<'a, 's, S, T, St>
where
    S: Item,
    T: Item,
    St: ReadOnlyItemStore<T> + ?Sized,
{
    link: &'a mut MultiLink<S, T>,
    store: &'s St,
    reciprocal: Option<&'a mut MultiLink<T, S>>,
    remove_invalid: bool,
    position: usize,
    invalid: Vec<ItemId>,
}

impl<'s, S, T, St> Iterator for LinkedItems<'_, 's, S, T, St>
where
    S: Item,
    T: Item + 's,
    St: ReadOnlyItemStore<T> + ?Sized,
{
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        let store: &'s St = self.store;
        while let Some(id) = self.link.edge.get(self.position) {
            self.position += 1;
            let Some(item) = store.lookup(id) else {
                self.invalid.push(id.clone());
                continue;
            };
            if let Some(reciprocal) = self.reciprocal.as_deref_mut() {
                if reciprocal.edge.put(self.link.owner.clone()).is_err() {
                    self.invalid.push(id.clone());
                    continue;
                }
            }
            return Some(item);
        }
        None
    }
}

impl<S, T, St> Drop for LinkedItems<'_, '_, S, T, St>
where
    S: Item,
    T: Item,
    St: ReadOnlyItemStore<T> + ?Sized,
{
    fn drop(&mut self) {
        if !self.remove_invalid || self.invalid.is_empty() {
            return;
        }
        tracing::warn!(
            target: "wingman::link",
            owner = %self.link.owner,
            removed = %join_ids(&self.invalid),
            "Removing invalid ids from link"
        );
        for id in &self.invalid {
            self.link.edge.remove(id);
        }
    }
}

pub(super) fn join_ids(ids: &[ItemId]) -> String {
    ids.iter().map(ItemId::as_str).collect::<Vec<_>>().join(", ")
}
