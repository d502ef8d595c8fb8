use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use super::{consts::MAX_PRECISION, format::FormatTemplate, kind::AngleKind};

/// The resulting value does not fit into the legal range of the angle's kind
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error("{kind} value {value} is out of range {}", .kind.range_notation())]
pub struct OutOfRange {
    /// The rejected value in decimal degrees
    pub value: f64,
    /// The kind the value was validated against
    pub kind: AngleKind,
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
/// Some part of the DMS notation exceeds its modulus
pub enum SubRangeViolation {
    /// minutes >= 60
    #[error("arc minutes value {0} not in range [0..60)")]
    ArcMinutes(f64),
    /// seconds >= 60
    #[error("arc seconds value {0} not in range [0..60)")]
    ArcSeconds(f64),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
/// The direction of an angle is specified more than once
pub enum AmbiguousMarker {
    /// `-S45 30 15`
    #[error("both the sign and the hemisphere letter are given")]
    SignAndHemisphere,
    /// `N45 30 15 S`
    #[error("the hemisphere letter is given both before and after the value")]
    PrefixAndSuffix,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// The reason the text was not recognized as an angle
pub enum ParseAngleError {
    /// Nothing but whitespaces provided
    #[error("empty value")]
    EmptyInput,
    /// None of the registered layouts matches the text
    #[error("not a supported {kind} notation")]
    NoGrammarMatch {
        /// The kind which layouts were tried
        kind: AngleKind,
    },
    /// See [`AmbiguousMarker`]
    #[error("ambiguous direction: {0}")]
    AmbiguousMarker(#[from] AmbiguousMarker),
    /// See [`SubRangeViolation`]
    #[error(transparent)]
    SubRangeViolation(#[from] SubRangeViolation),
    /// See [`OutOfRange`]
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    // this variant is practically impossible due to regex digits limitations
    /// The whole part of a matched group cannot be represented
    #[error("bad integer part: {0}")]
    Int(#[from] ParseIntError),
    /// The fractional part of a matched group cannot be represented
    #[error("bad decimal part: {0}")]
    Float(#[from] ParseFloatError),
}

/// Attempt to get the decimal degrees of an invalid angle
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Value {source_text:?} is not a valid {kind}: {reason}")]
pub struct NotValid {
    /// The text the angle was parsed from
    pub source_text: String,
    /// The requested kind of the angle
    pub kind: AngleKind,
    /// Why the text was rejected
    pub reason: ParseAngleError,
}

#[derive(Debug, Clone, PartialEq, Error)]
/// The reason the decimal degrees cannot be represented in the requested layout
pub enum FormatAngleError {
    /// See [`OutOfRange`]
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    /// Not a finite number or too big to be split into degrees, minutes and seconds
    #[error("{value} cannot be split into degrees, minutes and seconds")]
    Unrepresentable {
        /// The rejected value in decimal degrees
        value: f64,
    },
    /// Too many decimal digits of the arc seconds requested
    #[error("precision {precision} exceeds the maximum of {} digits", MAX_PRECISION)]
    TooPrecise {
        /// The requested number of digits
        precision: u8,
    },
    /// The template has a placeholder for a hemisphere letter, but the kind has no hemispheres
    #[error("{kind} has no hemispheres to format it with {template:?}")]
    NoHemisphere {
        /// The requested layout
        template: FormatTemplate,
        /// The kind of the formatted angle
        kind: AngleKind,
    },
    /// See [`NotValid`]
    #[error(transparent)]
    NotValid(#[from] NotValid),
}

/// The name of the angle kind is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown angle kind {0:?}, expected one of: latitude, longitude, bearing")]
pub struct ParseAngleKindError(pub(crate) String);
