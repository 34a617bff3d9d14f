use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};
use crate::order::OrderKind;
use crate::store::{SharedState, Version};

/// A position inside one materialized traversal order of an [`crate::OrderedBag`].
///
/// The order (a permutation of element indices) is computed once, when the cursor is
/// created, and never changes afterwards. Element values are read from the live bag on
/// access, guarded by the version captured at creation: once the bag is structurally
/// mutated, [`Cursor::get_current`] and the advance operations fail with
/// [`Error::ConcurrentModification`].
///
/// The cursor never mutates the bag. Its only mutable state is `position`, which
/// moves forward from `0` to `len()`.
pub struct Cursor<T> {
    store: SharedState<T>,
    kind: OrderKind,
    order: Rc<[usize]>,
    position: usize,
    created_version: Version,
}

impl<T> Cursor<T> {
    pub(crate) fn new(
        store: SharedState<T>,
        kind: OrderKind,
        order: Rc<[usize]>,
        created_version: Version,
        at_end: bool,
    ) -> Self {
        let position = if at_end { order.len() } else { 0 };
        Self {
            store,
            kind,
            order,
            position,
            created_version,
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the materialized order (the end position).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.order.len()
    }

    pub fn remaining(&self) -> usize {
        self.order.len() - self.position
    }

    pub fn created_version(&self) -> Version {
        self.created_version
    }

    /// Whether the bag was structurally mutated since this cursor was created.
    pub fn is_stale(&self) -> bool {
        self.store.borrow().version != self.created_version
    }

    /// Version first, then bounds: a stale cursor reports the modification even at the end.
    fn check(&self) -> Result<()> {
        let found = self.store.borrow().version;
        if found != self.created_version {
            debug!(
                "{} cursor invalidated: created at version {}, bag at {}",
                self.kind, self.created_version, found
            );
            return Err(Error::ConcurrentModification {
                expected: self.created_version,
                found,
            });
        }
        if self.position >= self.order.len() {
            return Err(Error::OutOfRange {
                position: self.position,
                len: self.order.len(),
            });
        }
        Ok(())
    }

    /// Borrow the current element for the duration of `f`.
    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R> {
        self.check()?;
        let state = self.store.borrow();
        // An unchanged version means the elements are exactly those the order was built from.
        Ok(f(&state.elements[self.order[self.position]]))
    }

    pub fn get_current(&self) -> Result<T>
    where
        T: Clone,
    {
        self.with_current(T::clone)
    }

    /// Step to the next position (pre-increment). On failure the cursor is left as is.
    pub fn advance(&mut self) -> Result<&mut Self> {
        self.check()?;
        self.position += 1;
        Ok(self)
    }

    /// Step to the next position and return the cursor as it was before the step
    /// (post-increment).
    pub fn advance_and_get_previous(&mut self) -> Result<Self> {
        self.check()?;
        let previous = self.clone();
        self.position += 1;
        Ok(previous)
    }

    /// Walk from this cursor up to (not including) `end`, yielding each element.
    pub fn until(self, end: &Cursor<T>) -> Traversal<T> {
        Traversal {
            cursor: self,
            end: end.clone(),
            finished: false,
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            kind: self.kind,
            order: Rc::clone(&self.order),
            position: self.position,
            created_version: self.created_version,
        }
    }
}

/// Cursors are equal when they come from the same bag and sit at the same position.
impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &self.kind)
            .field("position", &self.position)
            .field("len", &self.order.len())
            .field("created_version", &self.created_version)
            .finish()
    }
}

/// [`Iterator`] over a begin/end cursor pair.
///
/// Yields `Err` once and then stops if the bag is mutated mid-walk, or if the
/// cursor runs past its own end without meeting `end`.
pub struct Traversal<T> {
    cursor: Cursor<T>,
    end: Cursor<T>,
    finished: bool,
}

impl<T> Traversal<T> {
    pub fn kind(&self) -> OrderKind {
        self.cursor.kind()
    }
}

impl<T: Clone> Iterator for Traversal<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.cursor == self.end {
            return None;
        }
        let step = self
            .cursor
            .advance_and_get_previous()
            .and_then(|previous| previous.get_current());
        if step.is_err() {
            self.finished = true;
        }
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        (0, Some(self.cursor.remaining() + 1))
    }
}

impl<T: Clone> FusedIterator for Traversal<T> {}
