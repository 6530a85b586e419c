//! REPL, CLI, command parsing, and persistence for Wingman.
//!
//! This crate provides:
//! - [`command`] - Parsing of the line-oriented command language
//! - [`Session`] - Executes commands against a [`Model`](wingman_model::Model)
//! - [`Repl`] - Interactive read-eval-print loop
//! - Model serialization to and from `MessagePack` files

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use command::{Command, ItemKind, LinkTarget};
pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{Outcome, Session};
