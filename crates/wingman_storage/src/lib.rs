//! Item stores, link edges, and bidirectional link registries for Wingman.
//!
//! This crate provides:
//! - [`ItemStore`] - Insertion-ordered, id-indexed item storage
//! - [`LinkEdge`] - Capacity-bounded, duplicate-free edge of target ids
//! - [`SingleLink`] / [`MultiLink`] - Lazily resolved references by id
//! - [`BiLinkManager`] - Bidirectional link registry with read-time repair
//!
//! Links never hold items, only ids. Consistency between the two sides of a
//! relation is restored lazily: every read resolves ids against the owning
//! store, repairs one-sided links and prunes ids whose item has gone.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod link;
pub mod store;

pub use link::{
    BiLinkManager, EdgeState, LinkEdge, LinkParam, LinkedItems, MultiLink, SingleLink,
};
pub use store::{ItemStore, ReadOnlyItemStore};
