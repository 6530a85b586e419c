//! The trait shared by every stored entity.

use crate::id::ItemId;

/// A domain entity held in an item store.
///
/// The identifier is immutable for the lifetime of the item; everything
/// else is owned and mutated by the store holding the item.
pub trait Item {
    /// Returns the item's identifier.
    fn id(&self) -> &ItemId;

    /// Returns the lines used to display this item.
    ///
    /// The first line is the headline shown in listings.
    fn display_list(&self) -> Vec<String>;
}
