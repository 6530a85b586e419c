//! Integration tests for Layer 1: Storage
//!
//! Tests for item stores, link edges, link handles, and the bidirectional
//! registry.

mod edges;
mod links;

use wingman_foundation::{Item, ItemId};
use wingman_storage::ItemStore;

/// A person; the target side in these tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    id: ItemId,
}

/// A flight leg; the source side in these tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    id: ItemId,
}

impl Person {
    pub fn new(id: &str) -> Self {
        Self { id: id.into() }
    }
}

impl Leg {
    pub fn new(id: &str) -> Self {
        Self { id: id.into() }
    }
}

impl Item for Person {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![format!("person {}", self.id)]
    }
}

impl Item for Leg {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn display_list(&self) -> Vec<String> {
        vec![format!("leg {}", self.id)]
    }
}

pub fn people(ids: &[&str]) -> ItemStore<Person> {
    ItemStore::from_items(ids.iter().map(|id| Person::new(id)).collect()).unwrap()
}

pub fn legs(ids: &[&str]) -> ItemStore<Leg> {
    ItemStore::from_items(ids.iter().map(|id| Leg::new(id)).collect()).unwrap()
}

pub fn id(raw: &str) -> ItemId {
    ItemId::from(raw)
}
