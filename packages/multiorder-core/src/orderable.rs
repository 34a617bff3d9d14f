use std::cmp::Ordering;

/// Total order capability required by the value-sorted traversals
/// (ascending, descending, side-cross).
///
/// Kept separate from [`Ord`] so floating point elements can take part: `f32`/`f64`
/// are ordered with `total_cmp`, which places `-0.0` before `0.0` and NaNs at the ends.
/// Types that already implement `Ord` opt in with a one-line impl delegating to `cmp`.
pub trait Orderable {
    fn order_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! orderable_via_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn order_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

orderable_via_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String,
);

impl Orderable for f32 {
    #[inline]
    fn order_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Orderable for f64 {
    #[inline]
    fn order_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: Orderable + ?Sized> Orderable for &T {
    fn order_cmp(&self, other: &Self) -> Ordering {
        (**self).order_cmp(*other)
    }
}

impl<T: Orderable + ?Sized> Orderable for Box<T> {
    fn order_cmp(&self, other: &Self) -> Ordering {
        (**self).order_cmp(&**other)
    }
}

impl<T: Orderable> Orderable for Option<T> {
    fn order_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.order_cmp(b),
        }
    }
}

impl<A: Orderable, B: Orderable> Orderable for (A, B) {
    fn order_cmp(&self, other: &Self) -> Ordering {
        self.0.order_cmp(&other.0).then_with(|| self.1.order_cmp(&other.1))
    }
}
