//! Wingman - Flight operations registry
//!
//! This crate re-exports all layers of the Wingman system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wingman_runtime    - Commands, session, REPL, CLI, persistence
//! Layer 2: wingman_model      - Pilots, crew, planes, flights, locations
//! Layer 1: wingman_storage    - Item stores, link edges, link registry
//! Layer 0: wingman_foundation - Core types (ItemId, Item, Error)
//! ```

pub use wingman_foundation as foundation;
pub use wingman_model as model;
pub use wingman_runtime as runtime;
pub use wingman_storage as storage;
