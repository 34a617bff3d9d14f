//! Cursor factories: one `begin_*`/`end_*` pair per traversal order.
//!
//! Every call materializes the requested order from the bag's current contents and
//! stamps the cursor with the current version. A begin/end pair obtained without a
//! mutation in between is comparable, and advancing begin until it equals end visits
//! each element of that order exactly once. [`OrderedBag::bounds`] builds both ends
//! from a single materialization.

use std::rc::Rc;

use log::trace;

use crate::cursor::{Cursor, Traversal};
use crate::error::Result;
use crate::order::{
    compute_order, Ascending, Descending, Insertion, MiddleOut, OrderKind, OrderStrategy, Reverse,
    SideCross,
};
use crate::orderable::Orderable;
use crate::store::{OrderedBag, Version};

impl<T> OrderedBag<T> {
    fn materialize_with(
        &self,
        kind: OrderKind,
        strategy: impl FnOnce(&[T]) -> Vec<usize>,
    ) -> (Rc<[usize]>, Version) {
        let state = self.shared().borrow();
        let order: Rc<[usize]> = strategy(state.elements.as_slice()).into();
        trace!(
            "materialized {} order: len={} version={}",
            kind,
            order.len(),
            state.version
        );
        (order, state.version)
    }

    fn cursor_with(
        &self,
        kind: OrderKind,
        strategy: impl FnOnce(&[T]) -> Vec<usize>,
        at_end: bool,
    ) -> Cursor<T> {
        let (order, version) = self.materialize_with(kind, strategy);
        Cursor::new(Rc::clone(self.shared()), kind, order, version, at_end)
    }

    fn bounds_with(
        &self,
        kind: OrderKind,
        strategy: impl FnOnce(&[T]) -> Vec<usize>,
    ) -> (Cursor<T>, Cursor<T>) {
        let (order, version) = self.materialize_with(kind, strategy);
        let begin = Cursor::new(
            Rc::clone(self.shared()),
            kind,
            Rc::clone(&order),
            version,
            false,
        );
        let end = Cursor::new(Rc::clone(self.shared()), kind, order, version, true);
        (begin, end)
    }

    /// Begin cursor for a statically chosen strategy.
    pub fn begin_with<S: OrderStrategy<T>>(&self) -> Cursor<T> {
        self.cursor_with(S::KIND, S::compute, false)
    }

    /// End cursor for a statically chosen strategy.
    pub fn end_with<S: OrderStrategy<T>>(&self) -> Cursor<T> {
        self.cursor_with(S::KIND, S::compute, true)
    }

    /// Begin and end cursors sharing one materialization of `S`.
    pub fn bounds_of<S: OrderStrategy<T>>(&self) -> (Cursor<T>, Cursor<T>) {
        self.bounds_with(S::KIND, S::compute)
    }

    pub fn begin_insertion_order(&self) -> Cursor<T> {
        self.begin_with::<Insertion>()
    }

    pub fn end_insertion_order(&self) -> Cursor<T> {
        self.end_with::<Insertion>()
    }

    pub fn begin_reverse_order(&self) -> Cursor<T> {
        self.begin_with::<Reverse>()
    }

    pub fn end_reverse_order(&self) -> Cursor<T> {
        self.end_with::<Reverse>()
    }

    pub fn begin_middle_out_order(&self) -> Cursor<T> {
        self.begin_with::<MiddleOut>()
    }

    pub fn end_middle_out_order(&self) -> Cursor<T> {
        self.end_with::<MiddleOut>()
    }
}

impl<T: Orderable> OrderedBag<T> {
    pub fn begin_ascending_order(&self) -> Cursor<T> {
        self.begin_with::<Ascending>()
    }

    pub fn end_ascending_order(&self) -> Cursor<T> {
        self.end_with::<Ascending>()
    }

    pub fn begin_descending_order(&self) -> Cursor<T> {
        self.begin_with::<Descending>()
    }

    pub fn end_descending_order(&self) -> Cursor<T> {
        self.end_with::<Descending>()
    }

    pub fn begin_side_cross_order(&self) -> Cursor<T> {
        self.begin_with::<SideCross>()
    }

    pub fn end_side_cross_order(&self) -> Cursor<T> {
        self.end_with::<SideCross>()
    }

    /// Begin cursor for an order chosen at runtime.
    pub fn begin(&self, kind: OrderKind) -> Cursor<T> {
        self.cursor_with(kind, |data| compute_order(kind, data), false)
    }

    /// End cursor for an order chosen at runtime.
    pub fn end(&self, kind: OrderKind) -> Cursor<T> {
        self.cursor_with(kind, |data| compute_order(kind, data), true)
    }

    pub fn bounds(&self, kind: OrderKind) -> (Cursor<T>, Cursor<T>) {
        self.bounds_with(kind, |data| compute_order(kind, data))
    }

    /// Iterate the bag in `kind` order. Items turn into an error if the bag is
    /// mutated while the traversal is alive.
    pub fn traverse(&self, kind: OrderKind) -> Traversal<T> {
        let (begin, end) = self.bounds(kind);
        begin.until(&end)
    }

    /// Collect the elements in `kind` order.
    pub fn ordered(&self, kind: OrderKind) -> Vec<T>
    where
        T: Clone,
    {
        self.with_elements(|data| {
            compute_order(kind, data)
                .into_iter()
                .map(|i| data[i].clone())
                .collect()
        })
    }

    /// Collect the elements in `kind` order through a fresh cursor pair.
    pub fn try_ordered(&self, kind: OrderKind) -> Result<Vec<T>>
    where
        T: Clone,
    {
        self.traverse(kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_share_one_materialization() {
        let bag: OrderedBag<u32> = vec![3, 1, 2].into();
        let (begin, end) = bag.bounds(OrderKind::Descending);
        assert_eq!(begin.created_version(), end.created_version());
        assert_eq!(begin.len(), end.len());
        assert_eq!(begin.position(), 0);
        assert_eq!(end.position(), 3);
    }

    #[test]
    fn statically_chosen_strategy_matches_runtime_kind() {
        let bag: OrderedBag<u32> = vec![8, 3, 5, 1].into();
        let typed: Vec<u32> = bag
            .begin_with::<SideCross>()
            .until(&bag.end_with::<SideCross>())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(typed, bag.ordered(OrderKind::SideCross));
        assert_eq!(typed, vec![1, 8, 3, 5]);
    }

    #[test]
    fn unordered_element_types_support_position_orders() {
        #[derive(Clone, Debug, PartialEq)]
        struct Opaque(u8);

        let bag: OrderedBag<Opaque> = vec![Opaque(1), Opaque(2), Opaque(3)].into();
        let (begin, end) = bag.bounds_of::<MiddleOut>();
        let walked: Vec<Opaque> = begin.until(&end).map(|r| r.unwrap()).collect();
        assert_eq!(walked, vec![Opaque(2), Opaque(1), Opaque(3)]);
        assert_eq!(bag.begin_reverse_order().get_current(), Ok(Opaque(3)));
    }
}
