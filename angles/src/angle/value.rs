//! The validated angle and the public entry points of the conversion

use std::fmt;

use log::debug;

use crate::normalize::normalize;

use super::{
    consts::DEFAULT_PRECISION,
    convert::DmsParts,
    decompose::decompose,
    errors::{FormatAngleError, NotValid, ParseAngleError},
    format::{format_parts, FormatTemplate},
    grammar::{match_notation, plain_decimal},
    kind::AngleKind,
};

/// The angle of the given kind parsed from the text.
///
/// The value is either valid and holds the decimal degrees,
/// or invalid and holds the reason of the rejection.
/// It never changes after the construction.
///
///```
/// # use aviation_angles::{AngleKind, AngleValue};
/// let lat = AngleValue::parse("S45 30 15", AngleKind::Latitude);
/// assert!(lat.is_valid());
/// assert!((lat.decimal_degrees().unwrap() + 45.504_166).abs() < 1e-6);
///
/// let lat = AngleValue::parse("-S45 30 15", AngleKind::Latitude);
/// assert!(!lat.is_valid());
/// assert!(lat.decimal_degrees().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AngleValue {
    source: String,
    kind: AngleKind,
    outcome: Result<f64, ParseAngleError>,
}

impl AngleValue {
    /// Recognize the text as the angle of the given kind
    pub fn parse(source: &str, kind: AngleKind) -> Self {
        let outcome = to_decimal_degrees(source, kind);
        if let Err(err) = &outcome {
            debug!("{source:?} is not a valid {kind}: {err}");
        }

        Self {
            source: source.to_string(),
            kind,
            outcome,
        }
    }

    /// The text the angle was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The requested kind of the angle
    pub const fn kind(&self) -> AngleKind {
        self.kind
    }

    /// Was the text recognized as a legal angle
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The value of the angle in the decimal degrees.
    ///
    /// # Errors
    /// The angle is not valid.
    pub fn decimal_degrees(&self) -> Result<f64, NotValid> {
        self.outcome.clone().map_err(|reason| NotValid {
            source_text: self.source.clone(),
            kind: self.kind,
            reason,
        })
    }

    /// The reason the text was not recognized
    pub fn error(&self) -> Option<&ParseAngleError> {
        self.outcome.as_ref().err()
    }

    /// The message describing why the angle is not valid
    pub fn error_message(&self) -> Option<String> {
        self.decimal_degrees().err().map(|err| err.to_string())
    }

    /// Render the valid angle in the given template.
    ///
    /// # Errors
    /// - the angle is not valid;
    /// - see [`format_angle`](fn.format_angle.html).
    pub fn to_dms(&self, template: FormatTemplate, precision: u8) -> Result<String, FormatAngleError> {
        let dd = self.decimal_degrees()?;
        format_angle(dd, self.kind, template, precision)
    }
}

impl fmt::Display for AngleValue {
    /// The decimal degrees or the error message for the invalid angle.
    ///
    /// The alternate form renders the valid angle as DMS with the symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dd = match self.decimal_degrees() {
            Ok(dd) => dd,
            Err(err) => return write!(f, "{err}"),
        };

        if f.alternate() {
            let template = if self.kind.hemisphere_letters().is_some() {
                FormatTemplate::HemisphereSuffixSymbols
            } else {
                FormatTemplate::Spaced
            };
            let dms = format_angle(dd, self.kind, template, DEFAULT_PRECISION)
                .map_err(|_| fmt::Error)?;
            write!(f, "{dms}")
        } else {
            write!(f, "{dd}")
        }
    }
}

fn to_decimal_degrees(source: &str, kind: AngleKind) -> Result<f64, ParseAngleError> {
    let text = normalize(source);
    if text.is_empty() {
        return Err(ParseAngleError::EmptyInput);
    }

    if let Some(value) = plain_decimal(&text) {
        if kind.contains(value) {
            return Ok(value);
        }
        // the digits can still be a compact DMS
        debug!("{value} is out of the {kind} range, reading {text:?} as DMS");
    }

    let matched = match_notation(&text, kind).ok_or(ParseAngleError::NoGrammarMatch { kind })?;
    let parts = decompose(&matched, kind)?;
    Ok(kind.check_range(parts.to_decimal())?)
}

/// Recognize the text as the angle of the given kind.
///
/// The same as [`AngleValue::parse`](struct.AngleValue.html#method.parse).
///
///```
/// # use aviation_angles::{parse_angle, AngleKind};
/// let lon = parse_angle("0453015", AngleKind::Longitude);
/// assert!((lon.decimal_degrees().unwrap() - 45.504_166).abs() < 1e-6);
///
/// let brng = parse_angle("360", AngleKind::Bearing);
/// assert!(!brng.is_valid());
/// ```
pub fn parse_angle(source: &str, kind: AngleKind) -> AngleValue {
    AngleValue::parse(source, kind)
}

/// Render the decimal degrees in the given template
/// with `precision` decimal digits of the arc seconds.
///
///```
/// # use aviation_angles::{format_angle, AngleKind, FormatTemplate};
/// let dms = format_angle(-45.504_166_667, AngleKind::Latitude, FormatTemplate::HemispherePrefixSpaced, 2);
/// assert_eq!(dms.unwrap(), "S 45 30 15.00");
/// ```
///
/// # Errors
/// - the value is out of the kind's range;
/// - the template requires the hemisphere letter, but the kind has none;
/// - too big `precision`.
pub fn format_angle(
    dd: f64,
    kind: AngleKind,
    template: FormatTemplate,
    precision: u8,
) -> Result<String, FormatAngleError> {
    let dd = kind.check_range(dd)?;
    let mut parts = DmsParts::from_decimal(dd, precision)?;
    if kind == AngleKind::Bearing {
        // due north is 000, never 360
        parts = parts.wrap_full_turn();
    }
    format_parts(&parts, kind, template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::errors::{AmbiguousMarker, OutOfRange, SubRangeViolation};

    fn dd(source: &str, kind: AngleKind) -> f64 {
        parse_angle(source, kind).decimal_degrees().unwrap()
    }

    fn error(source: &str, kind: AngleKind) -> ParseAngleError {
        parse_angle(source, kind).error().cloned().unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{actual} is not close to {expected}"
        );
    }

    const DMS_45_30_15: f64 = 45.0 + 30.0 / 60.0 + 15.0 / 3600.0;

    #[test]
    fn hemisphere_and_sign_agree() {
        let by_letter = dd("S45 30 15", AngleKind::Latitude);
        let by_sign = dd("-45 30 15", AngleKind::Latitude);
        assert_close(by_letter, -DMS_45_30_15);
        assert_close(by_sign, by_letter);
    }

    #[test]
    fn sign_with_hemisphere_is_invalid() {
        let lat = parse_angle("-S45 30 15", AngleKind::Latitude);
        assert!(!lat.is_valid());
        assert_eq!(
            lat.error(),
            Some(&ParseAngleError::AmbiguousMarker(
                AmbiguousMarker::SignAndHemisphere
            ))
        );
    }

    #[test]
    fn compact_width_per_kind() {
        assert_close(dd("0453015", AngleKind::Longitude), DMS_45_30_15);
        assert_close(dd("453015", AngleKind::Latitude), DMS_45_30_15);
    }

    #[test]
    fn bearing_boundaries() {
        let full_turn = parse_angle("360", AngleKind::Bearing);
        assert!(!full_turn.is_valid());
        assert!(matches!(
            full_turn.error(),
            Some(ParseAngleError::OutOfRange(OutOfRange {
                kind: AngleKind::Bearing,
                ..
            }))
        ));

        let north = parse_angle("000", AngleKind::Bearing);
        assert!(north.is_valid());
        assert_eq!(north.decimal_degrees().unwrap(), 0.0);
    }

    #[test]
    fn plain_decimal_in_range() {
        assert_close(dd("45.5", AngleKind::Latitude), 45.5);
        assert_close(dd("-179,25", AngleKind::Longitude), -179.25);
        assert_close(dd("+12", AngleKind::Bearing), 12.0);
        assert_close(dd("45.", AngleKind::Latitude), 45.0);
        assert_close(dd(".5", AngleKind::Bearing), 0.5);
        assert_close(dd("W,25", AngleKind::Longitude), -0.25);
    }

    #[test]
    fn out_of_range_decimal_read_as_compact() {
        // 4530 is not a latitude, but 45°30′ is
        assert_close(dd("4530", AngleKind::Latitude), 45.5);
        assert_close(dd("-4530.5", AngleKind::Latitude), -(45.0 + 30.5 / 60.0));
        assert_close(dd("1803000", AngleKind::Bearing), 180.5);
    }

    #[test]
    fn in_range_decimal_is_not_reinterpreted() {
        // could be 00°30′, but it is a valid decimal latitude
        assert_close(dd("0030", AngleKind::Latitude), 30.0);
    }

    #[test]
    fn out_of_range_decimal_and_no_compact() {
        let err = error("95", AngleKind::Latitude);
        assert_eq!(
            err,
            ParseAngleError::OutOfRange(OutOfRange {
                value: 95.0,
                kind: AngleKind::Latitude
            })
        );

        let err = error("-10", AngleKind::Bearing);
        assert!(matches!(err, ParseAngleError::OutOfRange(_)));
    }

    #[test]
    fn out_of_range_dms() {
        let err = error("N90 00 01", AngleKind::Latitude);
        assert!(matches!(err, ParseAngleError::OutOfRange(_)));

        let err = error("1800001W", AngleKind::Longitude);
        assert!(matches!(err, ParseAngleError::OutOfRange(_)));

        let err = error("360-00-00", AngleKind::Bearing);
        assert!(matches!(err, ParseAngleError::OutOfRange(_)));
    }

    #[test]
    fn limits_are_valid() {
        assert_close(dd("N90 00 00", AngleKind::Latitude), 90.0);
        assert_close(dd("1800000W", AngleKind::Longitude), -180.0);
        assert_close(dd("359 59 59.999", AngleKind::Bearing), 360.0 - 0.001 / 3600.0);
    }

    #[test]
    fn normalized_before_matching() {
        assert_close(dd("  s45 30 15,0  ", AngleKind::Latitude), -DMS_45_30_15);
        assert_close(dd("045°30′15″ e", AngleKind::Longitude), DMS_45_30_15);
    }

    #[test]
    fn source_toolkit_samples() {
        let lon = AngleKind::Longitude;
        assert_close(dd("W125 44 32", lon), -(125.0 + 44.0 / 60.0 + 32.0 / 3600.0));
        assert_close(dd("125 44 32.111 E", lon), 125.0 + 44.0 / 60.0 + 32.111 / 3600.0);
        assert_close(dd("W 125 44 31.56", lon), -(125.0 + 44.0 / 60.0 + 31.56 / 3600.0));
        assert_close(dd("125 44 1 E", lon), 125.0 + 44.0 / 60.0 + 1.0 / 3600.0);
        assert_close(dd("125 44 1", lon), 125.0 + 44.0 / 60.0 + 1.0 / 3600.0);
        assert_eq!(
            error("W125 44 1 E", lon),
            ParseAngleError::AmbiguousMarker(AmbiguousMarker::PrefixAndSuffix)
        );
    }

    #[test]
    fn empty() {
        assert_eq!(error("", AngleKind::Bearing), ParseAngleError::EmptyInput);
        assert_eq!(error(" \t ", AngleKind::Latitude), ParseAngleError::EmptyInput);
    }

    #[test]
    fn garbage() {
        assert_eq!(
            error("forty five", AngleKind::Latitude),
            ParseAngleError::NoGrammarMatch {
                kind: AngleKind::Latitude
            }
        );
        assert_eq!(
            error("N45 30 15", AngleKind::Bearing),
            ParseAngleError::NoGrammarMatch {
                kind: AngleKind::Bearing
            }
        );
    }

    #[test]
    fn sub_range_violation() {
        let err = error("45 60 00 N", AngleKind::Latitude);
        assert_eq!(
            err,
            ParseAngleError::SubRangeViolation(SubRangeViolation::ArcMinutes(60.0))
        );
    }

    #[test]
    fn invalid_message() {
        let lat = parse_angle("95 00 00 N", AngleKind::Latitude);
        assert_eq!(
            lat.error_message().unwrap(),
            "Value \"95 00 00 N\" is not a valid latitude: \
            latitude value 95 is out of range [-90, 90]"
        );
        assert_eq!(lat.source(), "95 00 00 N");
        assert_eq!(lat.kind(), AngleKind::Latitude);
    }

    #[test]
    fn valid_has_no_message() {
        let lat = parse_angle("45", AngleKind::Latitude);
        assert!(lat.error_message().is_none());
        assert!(lat.error().is_none());
    }

    #[test]
    #[should_panic(expected = "is not a valid bearing")]
    fn decimal_degrees_of_invalid() {
        let brng = parse_angle("400", AngleKind::Bearing);
        let _dd = brng.decimal_degrees().map_err(|e| e.to_string()).unwrap();
    }

    #[test]
    fn never_valid_out_of_range() {
        for kind in AngleKind::ALL {
            for raw in [
                "-400", "-360", "-181", "-90.5", "90.0001", "180.5", "360", "999.9", "12345",
            ] {
                let angle = parse_angle(raw, kind);
                if let Ok(dd) = angle.decimal_degrees() {
                    assert!(kind.contains(dd), "{raw} as {kind} gives {dd}");
                }
            }
        }
    }

    #[test]
    fn format_valid_value() {
        let lon = parse_angle("W1254432", AngleKind::Longitude);
        assert_eq!(
            lon.to_dms(FormatTemplate::HemispherePrefixSeparated, 0).unwrap(),
            "W125 44 32"
        );
    }

    #[test]
    fn format_invalid_value() {
        let lon = parse_angle("W181", AngleKind::Longitude);
        let err = lon.to_dms(FormatTemplate::Spaced, 0).unwrap_err();
        assert!(matches!(err, FormatAngleError::NotValid(_)));
    }

    #[test]
    fn format_out_of_range() {
        let err = format_angle(90.5, AngleKind::Latitude, FormatTemplate::Spaced, 0).unwrap_err();
        assert_eq!(
            err,
            FormatAngleError::OutOfRange(OutOfRange {
                value: 90.5,
                kind: AngleKind::Latitude
            })
        );
        assert!(format_angle(360.0, AngleKind::Bearing, FormatTemplate::Compact, 0).is_err());
    }

    #[test]
    fn bearing_rounded_to_full_turn_is_north() {
        let text = format_angle(359.999_999_9, AngleKind::Bearing, FormatTemplate::Spaced, 0).unwrap();
        assert_eq!(text, "000 00 00");
        assert!(parse_angle(&text, AngleKind::Bearing).is_valid());

        let text = format_angle(359.999_999_9, AngleKind::Bearing, FormatTemplate::Compact, 2).unwrap();
        assert_eq!(text, "0000000.00");
    }

    #[test]
    fn negative_zero_gets_positive_hemisphere() {
        let text = format_angle(
            -1e-9,
            AngleKind::Latitude,
            FormatTemplate::HemisphereSuffixSpaced,
            0,
        )
        .unwrap();
        assert_eq!(text, "00 00 00 N");

        let text = format_angle(-1e-9, AngleKind::Longitude, FormatTemplate::Spaced, 0).unwrap();
        assert_eq!(text, "000 00 00");
    }

    #[test]
    fn formatting_is_idempotent() {
        let dd = dd("N45 30 15.123", AngleKind::Latitude);
        for template in FormatTemplate::applicable(AngleKind::Latitude) {
            let first = format_angle(dd, AngleKind::Latitude, template, 2).unwrap();
            let second = format_angle(dd, AngleKind::Latitude, template, 2).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn formatted_parses_back() {
        let samples = [
            (AngleKind::Latitude, -33.946_111),
            (AngleKind::Latitude, 89.999_999_9),
            (AngleKind::Longitude, 151.177_222),
            (AngleKind::Longitude, -0.461_389),
            (AngleKind::Bearing, 270.258_333),
            (AngleKind::Bearing, 12.5),
            (AngleKind::Bearing, 359.999_999_9),
        ];

        for (kind, value) in samples {
            for template in FormatTemplate::applicable(kind) {
                for precision in [0, 2, 4] {
                    let text = format_angle(value, kind, template, precision).unwrap();
                    let parsed = dd(&text, kind);
                    let mut diff = (parsed - value).abs();
                    if kind == AngleKind::Bearing {
                        diff = diff.min(360.0 - diff);
                    }
                    let tolerance = 0.5 * 10_f64.powi(-i32::from(precision)) / 3600.0 + 1e-9;
                    assert!(
                        diff <= tolerance,
                        "{value} as {template:?} = {text:?} parsed back as {parsed}"
                    );
                }
            }
        }
    }

    #[test]
    fn display() {
        let lat = parse_angle("S45 30 15", AngleKind::Latitude);
        assert_eq!(format!("{lat:#}"), "45°30′15.000″ S");

        let brng = parse_angle("090 15 00", AngleKind::Bearing);
        assert_eq!(brng.to_string(), "90.25");
        assert_eq!(format!("{brng:#}"), "090 15 00.000");

        let bad = parse_angle("", AngleKind::Bearing);
        assert_eq!(bad.to_string(), "Value \"\" is not a valid bearing: empty value");
    }
}
