use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Modification counter of a bag. Bumped by every structural mutation.
pub type Version = u64;

/// Shared state behind a bag handle. Cursors keep a read-only clone of the `Rc`.
pub(crate) struct BagState<T> {
    pub(crate) elements: Vec<T>,
    pub(crate) version: Version,
}

pub(crate) type SharedState<T> = Rc<RefCell<BagState<T>>>;

/// Elements and version read together from a bag.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot<T> {
    pub elements: Vec<T>,
    pub version: Version,
}

/// Ordered, duplicate-permitting collection that can be walked in several orders.
///
/// Elements keep their insertion order; the traversal orders are computed on demand by
/// the cursors handed out in [`crate::session`]. Cursors share the bag's state read-only,
/// which is how they notice a structural mutation made after they were created.
pub struct OrderedBag<T> {
    state: SharedState<T>,
}

impl<T> OrderedBag<T> {
    pub fn new() -> Self {
        Self::from_vec_at(Vec::new(), 0)
    }

    fn from_vec_at(elements: Vec<T>, version: Version) -> Self {
        Self {
            state: Rc::new(RefCell::new(BagState { elements, version })),
        }
    }

    /// Append `value` at the end. Always succeeds.
    pub fn append(&mut self, value: T) {
        let mut state = self.state.borrow_mut();
        state.elements.push(value);
        state.version += 1;
        debug!(
            "append: len={} version={}",
            state.elements.len(),
            state.version
        );
    }

    /// Remove every element equal to `value`, returning how many were removed.
    ///
    /// Fails with [`Error::NotFound`] and leaves the bag (and its version) untouched when
    /// nothing matches.
    pub fn remove(&mut self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        let mut state = self.state.borrow_mut();
        let before = state.elements.len();
        state.elements.retain(|e| e != value);
        let removed = before - state.elements.len();
        if removed == 0 {
            debug!("remove: no match, version={}", state.version);
            return Err(Error::NotFound);
        }
        state.version += 1;
        debug!(
            "remove: dropped {} element(s), len={} version={}",
            removed,
            state.elements.len(),
            state.version
        );
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> Version {
        self.state.borrow().version
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.state.borrow().elements.contains(value)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.state
            .borrow()
            .elements
            .iter()
            .filter(|e| *e == value)
            .count()
    }

    /// Run `f` over the elements in insertion order without cloning them.
    pub fn with_elements<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.state.borrow().elements.as_slice())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.state.borrow().elements.clone()
    }

    /// Copy out the elements together with the version they belong to.
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        let state = self.state.borrow();
        Snapshot {
            elements: state.elements.clone(),
            version: state.version,
        }
    }

    /// Whether both handles refer to the same underlying store.
    pub fn same_store(&self, other: &OrderedBag<T>) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub(crate) fn shared(&self) -> &SharedState<T> {
        &self.state
    }
}

impl<T> Default for OrderedBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone is a distinct store, so its cursors never compare equal to ours.
impl<T: Clone> Clone for OrderedBag<T> {
    fn clone(&self) -> Self {
        let state = self.state.borrow();
        Self::from_vec_at(state.elements.clone(), state.version)
    }
}

impl<T> From<Vec<T>> for OrderedBag<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec_at(elements, 0)
    }
}

impl<T> FromIterator<T> for OrderedBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for OrderedBag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("OrderedBag")
            .field("elements", &state.elements)
            .field("version", &state.version)
            .finish()
    }
}

/// Renders as `[e1, e2, ..., en]`; an empty bag renders as `[]`.
impl<T: fmt::Display> fmt::Display for OrderedBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.write_str("[")?;
        for (i, element) in state.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for OrderedBag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.state.borrow().elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedBag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(OrderedBag::from)
    }
}
