//! Numeric edge cost abstraction.

use std::fmt;
use std::ops::Add;

/// An edge cost.
///
/// Costs are compared with `PartialOrd` and accumulated with `checked_add`. Float costs that are
/// not finite (`inf`, `NaN`) are treated as "no edge" by the search engines.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    fn zero() -> Self;

    fn is_finite(&self) -> bool {
        true
    }

    /// `self + rhs`, or `None` when the sum does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_weight_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_weight_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_weight_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight_for_float!(f32, f64);
