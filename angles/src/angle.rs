//! Parsing, validation and formatting of an angle

mod consts;
mod convert;
mod decompose;
mod errors;
mod format;
mod grammar;
mod kind;
mod value;

pub use self::{
    consts::{DEFAULT_PRECISION, MAX_PRECISION},
    convert::DmsParts,
    decompose::{decompose, DecomposedAngle},
    errors::{
        AmbiguousMarker, FormatAngleError, NotValid, OutOfRange, ParseAngleError,
        ParseAngleKindError, SubRangeViolation,
    },
    format::{format_parts, FormatTemplate},
    grammar::{match_notation, Fields, Grammar, Layout, MatchResult, Path, PatternRegistry},
    kind::{AngleKind, Negative, ParseSignError, Positive, Sign},
    value::{format_angle, parse_angle, AngleValue},
};
