//! Utilities functions which do not linked to domain

use std::ops::{Div, Neg, Rem};

/// Allow conversion of a signed value into its unsigned equivalent
/// by dropping the sign away
pub(crate) trait ToUnsigned<U>: Default + Copy + PartialOrd + Neg<Output = Self> {
    /// represent the source (signed) type as target (unsigned) type
    fn as_type(self) -> U;

    /// Converts to unsigned absolute value
    /// along with the flag of the non-negative source
    fn unsigned_abs(self) -> (U, bool) {
        if self >= Self::default() {
            (self.as_type(), true)
        } else {
            ((-self).as_type(), false)
        }
    }
}

impl ToUnsigned<Self> for f64 {
    fn as_type(self) -> Self {
        self
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

const POW_10: [u64; 10] = [
    1_u64,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The powers of 10.
///
/// Returns `None` when the power is too big for the table.
pub fn pow_10(pow: usize) -> Option<u64> {
    POW_10.get(pow).copied()
}
