//! Aviation latitudes, longitudes and bearings:
//! recognizing the notations used by the operators,
//! validating the ranges and rendering the values back as degrees, minutes and seconds.
//!
//!```
//! use aviation_angles::{parse_angle, AngleKind, FormatTemplate};
//!
//! let lat = parse_angle("S45 30 15", AngleKind::Latitude);
//! let dd = lat.decimal_degrees().unwrap();
//! assert!((dd + 45.504_166).abs() < 1e-6);
//!
//! let dms = lat.to_dms(FormatTemplate::HemisphereSuffixCompact, 1).unwrap();
//! assert_eq!(dms, "453015.0S");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    decompose, format_angle, format_parts, match_notation, parse_angle, AmbiguousMarker,
    AngleKind, AngleValue, DecomposedAngle, DmsParts, Fields, FormatAngleError, FormatTemplate,
    Grammar, Layout, MatchResult, Negative, NotValid, OutOfRange, ParseAngleError,
    ParseAngleKindError, ParseSignError, Path, PatternRegistry, Positive, Sign,
    SubRangeViolation, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use coord::{
    Coordinates, East, North, ParsePoleError, ParseRotationalDirectionError, Pole,
    RotationalDirection, South, West,
};
pub use normalize::normalize;

mod angle;
mod coord;
mod normalize;
mod utils;
