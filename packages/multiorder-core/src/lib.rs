#![forbid(unsafe_code)]
//! Ordered, duplicate-permitting collection that can be traversed in several orders
//! (insertion, ascending, descending, reverse, side-cross, middle-out).
//! Each traversal materializes its order once into a cursor; cursors detect structural
//! mutation of the collection through a version stamp instead of serving stale data.

pub mod cursor;
pub mod error;
pub mod order;
pub mod orderable;
pub mod session;
pub mod store;

pub use cursor::{Cursor, Traversal};
pub use error::{Error, Result};
pub use order::{compute_order, OrderKind, OrderStrategy};
pub use orderable::Orderable;
pub use store::{OrderedBag, Snapshot, Version};
