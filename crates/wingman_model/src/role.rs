//! Roles an item can fill on a flight, and the relations they name.

use std::fmt;

use wingman_foundation::{Error, Result};
use wingman_storage::LinkParam;

/// A role on a flight, backed by one relation in a link registry.
///
/// The flight holds the relation under [`relation`](Role::relation) with room
/// for [`capacity`](Role::capacity) items. The other side holds it under
/// [`reverse`](Role::reverse) with no limit, since one item can serve on many
/// flights.
pub trait Role: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Every role of this kind, in declaration order.
    const ALL: &'static [Self];

    /// Word used for the role in commands.
    fn keyword(self) -> &'static str;

    /// Relation name on the flight side.
    fn relation(self) -> &'static str;

    /// Relation name on the other side.
    fn reverse(self) -> &'static str;

    /// How many items a flight takes in this role.
    fn capacity(self) -> usize;

    /// Both sides of the relation, flight side first.
    fn params(self) -> (LinkParam, LinkParam) {
        (
            LinkParam::bounded(self.relation(), self.capacity()),
            LinkParam::unbounded(self.reverse()),
        )
    }

    /// Parses a role from its command keyword.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if no role has this keyword.
    fn parse(input: &str) -> Result<Self> {
        parse_keyword(input, Self::ALL, Self::keyword, "role")
    }
}

/// Matches a keyword case-insensitively, treating `_` like `-`.
pub(crate) fn parse_keyword<K: Copy>(
    input: &str,
    all: &[K],
    keyword: fn(K) -> &'static str,
    what: &str,
) -> Result<K> {
    let wanted = input.trim().to_ascii_lowercase().replace('_', "-");
    all.iter()
        .copied()
        .find(|candidate| keyword(*candidate) == wanted)
        .ok_or_else(|| {
            let expected: Vec<_> = all.iter().map(|k| keyword(*k)).collect();
            Error::parse(format!(
                "unknown {what} '{input}', expected one of: {}",
                expected.join(", ")
            ))
        })
}
