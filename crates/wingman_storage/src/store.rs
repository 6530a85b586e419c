//! Item stores: the only authority on whether an item exists.
//!
//! Links resolve ids through [`ReadOnlyItemStore`], so anything that can look
//! an item up by id can back a link.

use std::collections::HashMap;

use wingman_foundation::{Error, Item, ItemId, Result};

/// Read access to a collection of items keyed by id.
pub trait ReadOnlyItemStore<T: Item> {
    /// Looks up an item by id.
    fn lookup(&self, id: &ItemId) -> Option<&T>;

    /// Returns true if an item with this id is stored.
    fn exists(&self, id: &ItemId) -> bool {
        self.lookup(id).is_some()
    }

    /// Gets an item by id.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has this id.
    fn get(&self, id: &ItemId) -> Result<&T> {
        self.lookup(id)
            .ok_or_else(|| Error::item_not_found(id.clone()))
    }
}

/// Insertion-ordered item storage with an id index.
///
/// Positions follow insertion order and shift down when an earlier item is
/// removed, matching how items are listed to the user.
#[derive(Clone, Debug)]
pub struct ItemStore<T> {
    /// Items in insertion order.
    items: Vec<T>,
    /// Position of each item in `items`.
    index: HashMap<ItemId, usize>,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Item> ItemStore<T> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from items in order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if two items share an id.
    pub fn from_items(items: Vec<T>) -> Result<Self> {
        let mut store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Inserts an item at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if an item with the same id is already stored.
    pub fn insert(&mut self, item: T) -> Result<()> {
        let id = item.id().clone();
        if self.index.contains_key(&id) {
            return Err(Error::duplicate_item(id));
        }
        self.index.insert(id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Removes an item by id and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has this id.
    pub fn remove(&mut self, id: &ItemId) -> Result<T> {
        let position = self
            .index
            .remove(id)
            .ok_or_else(|| Error::item_not_found(id.clone()))?;
        let item = self.items.remove(position);
        for later in &self.items[position..] {
            if let Some(slot) = self.index.get_mut(later.id()) {
                *slot -= 1;
            }
        }
        Ok(item)
    }

    /// Gets a mutable reference to an item by id.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has this id.
    pub fn get_mut(&mut self, id: &ItemId) -> Result<&mut T> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| Error::item_not_found(id.clone()))?;
        Ok(&mut self.items[position])
    }

    /// Gets an item by its zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the position is past the end.
    pub fn get_by_index(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.items.len()))
    }

    /// Returns the zero-based position of an item.
    #[must_use]
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Returns the number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Item> ReadOnlyItemStore<T> for ItemStore<T> {
    fn lookup(&self, id: &ItemId) -> Option<&T> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    fn exists(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::ItemStore;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use wingman_foundation::Item;

    // Only the ordered items are written; the id index is rebuilt on load.
    impl<T: Item + Serialize> Serialize for ItemStore<T> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.items.serialize(serializer)
        }
    }

    impl<'de, T: Item + Deserialize<'de>> Deserialize<'de> for ItemStore<T> {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let items = Vec::<T>::deserialize(deserializer)?;
            ItemStore::from_items(items).map_err(D::Error::custom)
        }
    }
}
