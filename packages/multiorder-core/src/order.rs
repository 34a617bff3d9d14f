use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::orderable::Orderable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The traversal orders a bag can be walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OrderKind {
    /// Elements in the order they were appended.
    Insertion,
    /// Elements sorted by value, smallest first. Equal values keep insertion order.
    Ascending,
    /// Elements sorted by value, largest first. Equal values keep insertion order.
    Descending,
    /// Insertion order, back to front.
    Reverse,
    /// Ascending order consumed from both ends: smallest, largest, next smallest, ...
    SideCross,
    /// Insertion order starting at the lower middle and fanning out left, right, left, ...
    MiddleOut,
}

impl OrderKind {
    pub const ALL: [OrderKind; 6] = [
        OrderKind::Insertion,
        OrderKind::Ascending,
        OrderKind::Descending,
        OrderKind::Reverse,
        OrderKind::SideCross,
        OrderKind::MiddleOut,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OrderKind::Insertion => "insertion",
            OrderKind::Ascending => "ascending",
            OrderKind::Descending => "descending",
            OrderKind::Reverse => "reverse",
            OrderKind::SideCross => "side-cross",
            OrderKind::MiddleOut => "middle-out",
        }
    }

    /// Whether the order depends on element values (and so needs [`Orderable`]).
    pub fn is_value_sorted(self) -> bool {
        matches!(
            self,
            OrderKind::Ascending | OrderKind::Descending | OrderKind::SideCross
        )
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "insertion" | "order" => Ok(OrderKind::Insertion),
            "ascending" => Ok(OrderKind::Ascending),
            "descending" => Ok(OrderKind::Descending),
            "reverse" => Ok(OrderKind::Reverse),
            "sidecross" => Ok(OrderKind::SideCross),
            "middleout" => Ok(OrderKind::MiddleOut),
            _ => Err(Error::UnknownOrderKind(s.to_string())),
        }
    }
}

/// A pure mapping from the current contents of a bag to the permutation of
/// indices `0..data.len()` that one traversal visits.
///
/// Implementations must be deterministic: equal inputs always produce the same permutation.
pub trait OrderStrategy<T> {
    const KIND: OrderKind;

    fn compute(data: &[T]) -> Vec<usize>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Insertion;

#[derive(Clone, Copy, Debug, Default)]
pub struct Ascending;

#[derive(Clone, Copy, Debug, Default)]
pub struct Descending;

#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

#[derive(Clone, Copy, Debug, Default)]
pub struct SideCross;

#[derive(Clone, Copy, Debug, Default)]
pub struct MiddleOut;

impl<T> OrderStrategy<T> for Insertion {
    const KIND: OrderKind = OrderKind::Insertion;

    fn compute(data: &[T]) -> Vec<usize> {
        (0..data.len()).collect()
    }
}

impl<T: Orderable> OrderStrategy<T> for Ascending {
    const KIND: OrderKind = OrderKind::Ascending;

    fn compute(data: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..data.len()).collect();
        // `sort_by` is stable, so duplicates stay in insertion order.
        indices.sort_by(|&a, &b| data[a].order_cmp(&data[b]));
        indices
    }
}

impl<T: Orderable> OrderStrategy<T> for Descending {
    const KIND: OrderKind = OrderKind::Descending;

    fn compute(data: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..data.len()).collect();
        indices.sort_by(|&a, &b| data[b].order_cmp(&data[a]));
        indices
    }
}

impl<T> OrderStrategy<T> for Reverse {
    const KIND: OrderKind = OrderKind::Reverse;

    fn compute(data: &[T]) -> Vec<usize> {
        (0..data.len()).rev().collect()
    }
}

impl<T: Orderable> OrderStrategy<T> for SideCross {
    const KIND: OrderKind = OrderKind::SideCross;

    fn compute(data: &[T]) -> Vec<usize> {
        let sorted = <Ascending as OrderStrategy<T>>::compute(data);
        let mut out = Vec::with_capacity(sorted.len());
        let (mut start, mut end) = (0usize, sorted.len());
        // `end` is exclusive here, so the window is `sorted[start..end]`.
        while start < end {
            out.push(sorted[start]);
            start += 1;
            if start < end {
                end -= 1;
                out.push(sorted[end]);
            }
        }
        out
    }
}

impl<T> OrderStrategy<T> for MiddleOut {
    const KIND: OrderKind = OrderKind::MiddleOut;

    fn compute(data: &[T]) -> Vec<usize> {
        let n = data.len();
        let mut out = Vec::with_capacity(n);
        if n == 0 {
            return out;
        }

        let mid = n / 2;
        out.push(mid);
        // `left` counts the untouched slots below it; `right` is the next slot above.
        let (mut left, mut right) = (mid, mid + 1);
        while left > 0 || right < n {
            if left > 0 {
                left -= 1;
                out.push(left);
            }
            if right < n {
                out.push(right);
                right += 1;
            }
        }
        out
    }
}

/// Compute the visiting permutation for `kind` over `data`.
pub fn compute_order<T: Orderable>(kind: OrderKind, data: &[T]) -> Vec<usize> {
    match kind {
        OrderKind::Insertion => <Insertion as OrderStrategy<T>>::compute(data),
        OrderKind::Ascending => <Ascending as OrderStrategy<T>>::compute(data),
        OrderKind::Descending => <Descending as OrderStrategy<T>>::compute(data),
        OrderKind::Reverse => <Reverse as OrderStrategy<T>>::compute(data),
        OrderKind::SideCross => <SideCross as OrderStrategy<T>>::compute(data),
        OrderKind::MiddleOut => <MiddleOut as OrderStrategy<T>>::compute(data),
    }
}
