//! Links between items held in independent stores.
//!
//! Every link is a set of ids in a [`LinkEdge`]. Two handle types sit on top
//! of edges:
//! - [`SingleLink`] points at exactly one item.
//! - [`MultiLink`] is an owner-scoped edge with optional reciprocal repair.
//!
//! [`BiLinkManager`] keeps both directions of every declared relation between
//! two item kinds and repairs or prunes broken reciprocity when read.

mod bilink;
mod edge;
mod multi;
mod param;
mod single;

pub use bilink::BiLinkManager;
pub use edge::{EdgeState, LinkEdge};
pub use multi::{LinkedItems, MultiLink};
pub use param::LinkParam;
pub use single::SingleLink;
