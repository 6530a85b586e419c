//! Core identifiers, item trait, and error taxonomy for Wingman.
//!
//! This crate provides:
//! - [`ItemId`] - Opaque, globally unique item identifiers
//! - [`Item`] - The trait every stored domain entity implements
//! - [`Error`] - Rich error types, including the link error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod item;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::ItemId;
pub use item::Item;
