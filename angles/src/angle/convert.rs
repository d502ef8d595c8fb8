//! Splitting the decimal degrees into degrees, minutes and seconds

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use num_traits::ToPrimitive;

use crate::utils::{div_mod, pow_10, ToUnsigned};

use super::{
    consts::{FULL_TURN_DEG, MAX_PRECISION, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    decompose::DecomposedAngle,
    errors::FormatAngleError,
    kind::Sign,
};

/// Degrees, minutes and seconds rounded to the given number of decimal digits.
///
/// The seconds are stored as the whole seconds and the integer fraction
/// of `10^-precision` arc seconds, so the minutes and the seconds
/// are always less than 60 after the rounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsParts {
    sign: Sign,
    degree: u16,
    minute: u8,
    second: u8,
    second_fraction: u32,
    precision: u8,
}

impl DmsParts {
    /// Split the decimal degrees into the parts,
    /// rounding the seconds to `precision` decimal digits.
    ///
    /// The rounding overflow is carried into the minutes and further into the degrees:
    ///
    ///```
    /// # use aviation_angles::{DmsParts, Sign};
    /// let parts = DmsParts::from_decimal(45.999_999_999, 0).unwrap();
    /// assert_eq!(parts.sign(), Sign::Positive);
    /// assert_eq!((parts.degree(), parts.minute(), parts.whole_seconds()), (46, 0, 0));
    /// ```
    ///
    /// # Errors
    /// - the value is not finite or too big (`Unrepresentable`);
    /// - the `precision` is more than [`MAX_PRECISION`](constant.MAX_PRECISION.html).
    pub fn from_decimal(dd: f64, precision: u8) -> Result<Self, FormatAngleError> {
        let scale = Some(precision)
            .filter(|&p| p <= MAX_PRECISION)
            .and_then(|p| pow_10(usize::from(p)))
            .and_then(|scale| u32::try_from(scale).ok())
            .ok_or(FormatAngleError::TooPrecise { precision })?;
        let unrepresentable = || FormatAngleError::Unrepresentable { value: dd };

        let (abs, is_positive) = dd.unsigned_abs();
        if !abs.is_finite() {
            return Err(unrepresentable());
        }

        let min_in_deg = u64::from(MINUTES_IN_DEGREE);
        let sec_in_min = u64::from(SECONDS_IN_MINUTE);

        let degree = abs.trunc();
        let minutes = abs.fract() * f64::from(MINUTES_IN_DEGREE);
        let minute = minutes.trunc();
        let seconds = minutes.fract() * f64::from(SECONDS_IN_MINUTE);

        let degree = degree.to_u64().ok_or_else(unrepresentable)?;
        let minute = minute.to_u64().ok_or_else(unrepresentable)?;
        let scaled_seconds = (seconds * f64::from(scale))
            .round()
            .to_u64()
            .ok_or_else(unrepresentable)?;

        // carry the rounding overflow: 60″ -> 1′, 60′ -> 1°
        let (carry, scaled_seconds) = div_mod(scaled_seconds, sec_in_min * u64::from(scale));
        let (carry, minute) = div_mod(minute + carry, min_in_deg);
        let degree = degree + carry;

        let (second, second_fraction) = div_mod(scaled_seconds, u64::from(scale));
        // a tiny negative value rounded to zero has no direction
        let is_zero = degree == 0 && minute == 0 && scaled_seconds == 0;

        Ok(Self {
            sign: Sign::from(is_positive || is_zero),
            degree: degree.to_u16().ok_or_else(unrepresentable)?,
            minute: minute.to_u8().ok_or_else(unrepresentable)?,
            second: second.to_u8().ok_or_else(unrepresentable)?,
            second_fraction: second_fraction.to_u32().ok_or_else(unrepresentable)?,
            precision,
        })
    }

    /// Fold the full turn carried by the rounding back to zero degrees
    pub(crate) fn wrap_full_turn(self) -> Self {
        if self.degree == FULL_TURN_DEG {
            Self { degree: 0, ..self }
        } else {
            self
        }
    }

    /// The direction of the angle
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// The whole degrees
    pub const fn degree(self) -> u16 {
        self.degree
    }

    /// The whole arc minutes (0..60)
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The whole arc seconds (0..60)
    pub const fn whole_seconds(self) -> u8 {
        self.second
    }

    /// The fraction of the arc second in the units of `10^-precision`
    pub const fn second_fraction(self) -> u32 {
        self.second_fraction
    }

    /// The number of decimal digits of the arc seconds
    pub const fn precision(self) -> u8 {
        self.precision
    }

    /// The arc seconds with the fraction
    pub fn second(self) -> f64 {
        let scale = pow_10(usize::from(self.precision))
            .and_then(|scale| u32::try_from(scale).ok())
            .map_or(1.0, f64::from);
        f64::from(self.second) + f64::from(self.second_fraction) / scale
    }

    /// The arc seconds zero-padded to 2 whole digits
    /// with exactly `precision` digits of the fraction
    pub(crate) fn seconds_notation(self) -> String {
        if self.precision == 0 {
            format!("{:02}", self.second)
        } else {
            format!(
                "{:02}.{:0width$}",
                self.second,
                self.second_fraction,
                width = usize::from(self.precision)
            )
        }
    }

    /// Fold the parts back into the decimal degrees
    pub fn to_decimal(self) -> f64 {
        DecomposedAngle::from(self).to_decimal()
    }
}

impl From<DmsParts> for DecomposedAngle {
    fn from(parts: DmsParts) -> Self {
        Self {
            sign: parts.sign,
            degree: u32::from(parts.degree),
            minute: f64::from(parts.minute),
            second: parts.second(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::kind::{Negative, Positive};

    fn dms(parts: DmsParts) -> (u16, u8, u8, u32) {
        (
            parts.degree(),
            parts.minute(),
            parts.whole_seconds(),
            parts.second_fraction(),
        )
    }

    #[test]
    fn simple_split() {
        let parts = DmsParts::from_decimal(45.504_166_666_7, 3).unwrap();
        assert_eq!(parts.sign(), Positive);
        assert_eq!(dms(parts), (45, 30, 15, 0));
        assert_eq!(parts.seconds_notation(), "15.000");
    }

    #[test]
    fn negative_split() {
        let parts = DmsParts::from_decimal(-122.5, 2).unwrap();
        assert_eq!(parts.sign(), Negative);
        assert_eq!(dms(parts), (122, 30, 0, 0));
    }

    #[test]
    fn seconds_fraction() {
        let parts = DmsParts::from_decimal(10.123_456, 3).unwrap();
        // 10° 7′ 24.4416″
        assert_eq!(dms(parts), (10, 7, 24, 442));
        assert_eq!(parts.seconds_notation(), "24.442");
        assert!((parts.second() - 24.442).abs() < 1e-9);
    }

    #[test]
    fn leading_zeros_of_fraction() {
        // 1.5 arc second = 0.000416667°
        let parts = DmsParts::from_decimal(0.000_416_666_67, 4).unwrap();
        assert_eq!(dms(parts), (0, 0, 1, 5000));
        assert_eq!(parts.seconds_notation(), "01.5000");

        let parts = DmsParts::from_decimal(0.000_280_555_6, 2).unwrap();
        // 1.01″
        assert_eq!(parts.seconds_notation(), "01.01");
    }

    #[test]
    fn carry_into_degrees() {
        let parts = DmsParts::from_decimal(45.999_999_999, 0).unwrap();
        assert_eq!(parts.sign(), Positive);
        assert_eq!(dms(parts), (46, 0, 0, 0));
    }

    #[test]
    fn carry_into_minutes() {
        // 12° 30′ 59.9996″
        let parts = DmsParts::from_decimal(12.516_666_555, 3).unwrap();
        assert_eq!(dms(parts), (12, 31, 0, 0));
    }

    #[test]
    fn carry_with_precision() {
        let parts = DmsParts::from_decimal(-89.999_999_999_9, 5).unwrap();
        assert_eq!(parts.sign(), Negative);
        assert_eq!(dms(parts), (90, 0, 0, 0));
        assert_eq!(parts.seconds_notation(), "00.00000");
    }

    #[test]
    fn no_carry_below_half() {
        let parts = DmsParts::from_decimal(45.999_861, 0).unwrap();
        // 45° 59′ 59.4996″
        assert_eq!(dms(parts), (45, 59, 59, 0));
    }

    #[test]
    fn zero() {
        let parts = DmsParts::from_decimal(0.0, 3).unwrap();
        assert_eq!(parts.sign(), Positive);
        assert_eq!(dms(parts), (0, 0, 0, 0));
        assert_eq!(parts.seconds_notation(), "00.000");
    }

    #[test]
    fn negative_rounded_to_zero_is_positive() {
        let parts = DmsParts::from_decimal(-1e-9, 0).unwrap();
        assert_eq!(parts.sign(), Positive);
        assert_eq!(dms(parts), (0, 0, 0, 0));

        let parts = DmsParts::from_decimal(-1e-9, MAX_PRECISION).unwrap();
        assert_eq!(parts.sign(), Negative);
    }

    #[test]
    fn full_turn_wrapped() {
        let parts = DmsParts::from_decimal(359.999_999_9, 0).unwrap();
        assert_eq!(dms(parts), (360, 0, 0, 0));
        assert_eq!(dms(parts.wrap_full_turn()), (0, 0, 0, 0));

        let parts = DmsParts::from_decimal(359.5, 0).unwrap();
        assert_eq!(parts.wrap_full_turn(), parts);
    }

    #[test]
    fn zero_precision_notation() {
        let parts = DmsParts::from_decimal(45.504_166_666_7, 0).unwrap();
        assert_eq!(parts.seconds_notation(), "15");
    }

    #[test]
    fn max_precision() {
        let parts = DmsParts::from_decimal(1.000_000_1, MAX_PRECISION).unwrap();
        assert_eq!(parts.precision(), MAX_PRECISION);
        assert_eq!(parts.seconds_notation().len(), 2 + 1 + usize::from(MAX_PRECISION));
    }

    #[test]
    fn too_precise() {
        let err = DmsParts::from_decimal(1.0, MAX_PRECISION + 1).unwrap_err();
        assert_eq!(err, FormatAngleError::TooPrecise { precision: 10 });
    }

    #[test]
    fn not_finite() {
        assert!(matches!(
            DmsParts::from_decimal(f64::NAN, 2),
            Err(FormatAngleError::Unrepresentable { .. })
        ));
        assert!(matches!(
            DmsParts::from_decimal(f64::NEG_INFINITY, 2),
            Err(FormatAngleError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn too_big() {
        assert!(matches!(
            DmsParts::from_decimal(1e12, 2),
            Err(FormatAngleError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn round_trip_law() {
        for precision in 0..=6_u8 {
            // half of the last digit of the arc second in degrees
            let tolerance = 0.5 * 10_f64.powi(-i32::from(precision)) / 3600.0 + 1e-12;

            for step in 0..=3600 {
                let dd = -180.0 + f64::from(step) * 0.1 + f64::from(step % 7) * 0.000_123;
                let parts = DmsParts::from_decimal(dd, precision).unwrap();
                assert!(parts.minute() < 60);
                assert!(parts.whole_seconds() < 60);
                assert!(
                    (parts.to_decimal() - dd).abs() <= tolerance,
                    "{dd} -> {parts:?} with precision {precision}"
                );
            }
        }
    }
}
