//! Turning the matched text fields into numbers with the resolved sign

use num_traits::ToPrimitive;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::{AmbiguousMarker, OutOfRange, ParseAngleError, SubRangeViolation},
    grammar::{Fields, MatchResult, Path},
    kind::{AngleKind, Positive, Sign},
};

/// The numeric parts of an angle before they are folded into the decimal degrees
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecomposedAngle {
    /// The direction of the angle
    pub sign: Sign,
    /// The whole degrees
    pub degree: u32,
    /// Arc minutes, can have a fraction when the seconds are absent
    pub minute: f64,
    /// Arc seconds with the fraction
    pub second: f64,
}

impl DecomposedAngle {
    /// Fold the parts into the decimal degrees: `sign × (D + M/60 + S/3600)`
    pub fn to_decimal(self) -> f64 {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_deg = min_in_deg * f64::from(SECONDS_IN_MINUTE);

        let magnitude = f64::from(self.degree) + self.minute / min_in_deg + self.second / sec_in_deg;
        self.sign.signum() * magnitude
    }
}

/// Convert the fields of the matched grammar into numbers.
///
/// # Errors
/// - the direction is given twice (`AmbiguousMarker`);
/// - the minutes or the seconds are not less than 60 (`SubRangeViolation`);
/// - some group cannot be parsed as a number.
pub fn decompose(
    matched: &MatchResult<'_>,
    kind: AngleKind,
) -> Result<DecomposedAngle, ParseAngleError> {
    let fields = &matched.fields;
    let sign = resolve_sign(fields, kind)?;

    let (degree, minute, second) = match matched.layout.path() {
        Path::Dms => {
            let degree: u32 = fields.degrees.parse()?;
            let minute: u8 = required(fields.minutes, kind)?.parse()?;
            let second: f64 = required(fields.seconds, kind)?.parse()?;
            (degree, f64::from(minute), second)
        }
        Path::Dm => {
            let degree: u32 = fields.degrees.parse()?;
            let minute: f64 = required(fields.minutes, kind)?.parse()?;
            (degree, minute, 0.0)
        }
        Path::Decimal => {
            let value: f64 = fields.degrees.parse()?;
            let degree = value.trunc().to_u32().ok_or(OutOfRange {
                value: sign.signum() * value,
                kind,
            })?;
            (degree, value.fract() * f64::from(MINUTES_IN_DEGREE), 0.0)
        }
    };

    check_sub_ranges(minute, second)?;

    Ok(DecomposedAngle {
        sign,
        degree,
        minute,
        second,
    })
}

fn required(group: Option<&str>, kind: AngleKind) -> Result<&str, ParseAngleError> {
    group.ok_or(ParseAngleError::NoGrammarMatch { kind })
}

/// The explicit sign or the hemisphere letter define the direction,
/// but only one of them is allowed.
fn resolve_sign(fields: &Fields<'_>, kind: AngleKind) -> Result<Sign, ParseAngleError> {
    let hemisphere = match (fields.hem_prefix, fields.hem_suffix) {
        (Some(_), Some(_)) => return Err(AmbiguousMarker::PrefixAndSuffix.into()),
        (prefix, suffix) => prefix.or(suffix),
    };

    match (fields.sign, hemisphere) {
        (Some(_), Some(_)) => Err(AmbiguousMarker::SignAndHemisphere.into()),
        (Some(sign), None) => Ok(sign),
        (None, Some(letter)) => kind
            .sign_of_hemisphere(letter)
            .ok_or(ParseAngleError::NoGrammarMatch { kind }),
        (None, None) => Ok(Positive),
    }
}

fn check_sub_ranges(minute: f64, second: f64) -> Result<(), SubRangeViolation> {
    let valid_minutes = 0.0..f64::from(MINUTES_IN_DEGREE);
    if !valid_minutes.contains(&minute) {
        return Err(SubRangeViolation::ArcMinutes(minute));
    }

    let valid_seconds = 0.0..f64::from(SECONDS_IN_MINUTE);
    if !valid_seconds.contains(&second) {
        return Err(SubRangeViolation::ArcSeconds(second));
    }

    Ok(())
}
