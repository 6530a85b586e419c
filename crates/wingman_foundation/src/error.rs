//! Error types for the Wingman system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The three link kinds ([`ErrorKind::LinkBroken`], [`ErrorKind::LinkFull`],
//! [`ErrorKind::LinkNotFound`]) form the link error taxonomy that the command
//! layer catches and reports to the user.

use std::fmt;

use thiserror::Error;

use crate::id::ItemId;

/// Result alias used throughout Wingman.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wingman operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a broken link error.
    #[must_use]
    pub fn link_broken(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkBroken(message.into()))
    }

    /// Creates a full link error.
    #[must_use]
    pub fn link_full(capacity: usize) -> Self {
        Self::new(ErrorKind::LinkFull { capacity })
    }

    /// Creates a missing link declaration error.
    #[must_use]
    pub fn link_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkNotFound(message.into()))
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates a duplicate item error.
    #[must_use]
    pub fn duplicate_item(id: ItemId) -> Self {
        Self::new(ErrorKind::DuplicateItem(id))
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError(message.into()))
    }

    /// Creates a user-facing command failure.
    #[must_use]
    pub fn command_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandFailed(message.into()))
    }

    /// Returns true if this error belongs to the link error taxonomy.
    #[must_use]
    pub fn is_link_error(&self) -> bool {
        self.kind.is_link_error()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A link target does not resolve, or an item failed an existence
    /// precondition before being bound.
    #[error("broken link: {0}")]
    LinkBroken(String),

    /// Insertion of a new id into an edge already at capacity.
    #[error("link is full (capacity {capacity})")]
    LinkFull {
        /// The capacity of the full edge.
        capacity: usize,
    },

    /// An owner or relation name is missing from a registry's schema.
    #[error("link not found: {0}")]
    LinkNotFound(String),

    /// Item was not found in its store.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// An item with the same id is already stored.
    #[error("duplicate item: {0}")]
    DuplicateItem(ItemId),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// Command text could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// A command failed; the message is meant for the user.
    #[error("{0}")]
    CommandFailed(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File or stream IO failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for [`LinkBroken`](Self::LinkBroken),
    /// [`LinkFull`](Self::LinkFull) and [`LinkNotFound`](Self::LinkNotFound).
    #[must_use]
    pub fn is_link_error(&self) -> bool {
        matches!(
            self,
            Self::LinkBroken(_) | Self::LinkFull { .. } | Self::LinkNotFound(_)
        )
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The command or operation that failed.
    pub source: Option<String>,
    /// Chain of operations leading to the failure.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
