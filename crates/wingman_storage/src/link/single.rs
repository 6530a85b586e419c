//! A lazily resolved reference to exactly one item.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use wingman_foundation::{Error, Item, ItemId, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::store::ReadOnlyItemStore;

/// Points at one item of type `T` by id.
///
/// The id is resolved against the store on every read; existence is never
/// cached, so a link to a removed item fails on the next `get`.
///
/// Two single links are equal when they hold the same id; ids are unique
/// across item kinds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = ""))]
pub struct SingleLink<T> {
    target: ItemId,
    #[cfg_attr(feature = "serde", serde(skip))]
    _target: PhantomData<fn() -> T>,
}

impl<T: Item> SingleLink<T> {
    /// Creates a link to the given id without checking that it exists.
    #[must_use]
    pub fn new(target: ItemId) -> Self {
        Self {
            target,
            _target: PhantomData,
        }
    }

    /// Creates a link to an item after checking it is in the store.
    ///
    /// # Errors
    ///
    /// Returns `LinkBroken` if the item is not in the store.
    pub fn to(item: &T, store: &impl ReadOnlyItemStore<T>) -> Result<Self> {
        let mut link = Self::new(item.id().clone());
        link.set(item, store)?;
        Ok(link)
    }

    /// Returns the target id.
    #[must_use]
    pub fn target_id(&self) -> &ItemId {
        &self.target
    }

    /// Resolves the target, returning `None` if it is gone.
    pub fn get_optional<'s>(&self, store: &'s impl ReadOnlyItemStore<T>) -> Option<&'s T> {
        store.lookup(&self.target)
    }

    /// Resolves the target.
    ///
    /// # Errors
    ///
    /// Returns `LinkBroken` if the target id no longer resolves.
    pub fn get<'s>(&self, store: &'s impl ReadOnlyItemStore<T>) -> Result<&'s T> {
        self.get_optional(store)
            .ok_or_else(|| Error::link_broken(format!("item not found: {}", self.target)))
    }

    /// Rebinds the link to another item.
    ///
    /// # Errors
    ///
    /// Returns `LinkBroken` if the item is not registered with the store,
    /// which means it was removed or the data is corrupted. The link is left
    /// unchanged.
    pub fn set(&mut self, item: &T, store: &impl ReadOnlyItemStore<T>) -> Result<()> {
        if !store.exists(item.id()) {
            return Err(Error::link_broken(format!(
                "{} is not found in its store, maybe the data is corrupted or it has been deleted",
                item.id()
            )));
        }
        self.target = item.id().clone();
        Ok(())
    }
}

impl<T> Clone for SingleLink<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            _target: PhantomData,
        }
    }
}

impl<T> PartialEq for SingleLink<T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}

impl<T> Eq for SingleLink<T> {}

impl<T> Hash for SingleLink<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
    }
}

impl<T> fmt::Debug for SingleLink<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SingleLink({})", self.target)
    }
}
