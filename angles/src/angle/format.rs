//! Fixed layouts to render the degrees, minutes and seconds

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN},
    convert::DmsParts,
    errors::FormatAngleError,
    kind::{AngleKind, Negative},
};

/// The layout of the formatted angle.
///
/// The examples are given for the latitude `45°30′15″ N` with the precision 3.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatTemplate {
    /// `N 45 30 15.000`
    HemispherePrefixSpaced,
    /// `N45 30 15.000`
    HemispherePrefixSeparated,
    /// `N453015.000`
    HemispherePrefixCompact,
    /// `45 30 15.000 N`
    HemisphereSuffixSpaced,
    /// `45 30 15.000N`
    HemisphereSuffixSeparated,
    /// `453015.000N`
    HemisphereSuffixCompact,
    /// `N 45°30′15.000″`
    HemispherePrefixSymbols,
    /// `45°30′15.000″ N`
    HemisphereSuffixSymbols,
    /// `45 30 15.000`, the negative values get the leading `-`
    Spaced,
    /// `453015.000`, the negative values get the leading `-`
    Compact,
}

impl FormatTemplate {
    /// All the templates
    pub const ALL: [Self; 10] = [
        Self::HemispherePrefixSpaced,
        Self::HemispherePrefixSeparated,
        Self::HemispherePrefixCompact,
        Self::HemisphereSuffixSpaced,
        Self::HemisphereSuffixSeparated,
        Self::HemisphereSuffixCompact,
        Self::HemispherePrefixSymbols,
        Self::HemisphereSuffixSymbols,
        Self::Spaced,
        Self::Compact,
    ];

    /// Is there a placeholder for the hemisphere letter in the template
    pub const fn has_hemisphere(self) -> bool {
        !matches!(self, Self::Spaced | Self::Compact)
    }

    /// The templates applicable for the given kind
    pub fn applicable(kind: AngleKind) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |template| kind.hemisphere_letters().is_some() || !template.has_hemisphere())
    }
}

/// Render the parts into the template.
///
/// The degrees are zero-padded to the width of the kind, the minutes to 2 digits,
/// the whole seconds to 2 digits with exactly `precision` digits of the fraction.
///
/// # Errors
/// A template with the hemisphere letter requested for a kind without hemispheres.
pub fn format_parts(
    parts: &DmsParts,
    kind: AngleKind,
    template: FormatTemplate,
) -> Result<String, FormatAngleError> {
    let deg = format!("{:0width$}", parts.degree(), width = kind.degree_width());
    let min = format!("{:02}", parts.minute());
    let sec = parts.seconds_notation();

    let sign = if parts.sign() == Negative { "-" } else { "" };
    let hem = || {
        kind.hemisphere(parts.sign())
            .ok_or(FormatAngleError::NoHemisphere { template, kind })
    };

    let formatted = match template {
        FormatTemplate::HemispherePrefixSpaced => format!("{} {deg} {min} {sec}", hem()?),
        FormatTemplate::HemispherePrefixSeparated => format!("{}{deg} {min} {sec}", hem()?),
        FormatTemplate::HemispherePrefixCompact => format!("{}{deg}{min}{sec}", hem()?),
        FormatTemplate::HemisphereSuffixSpaced => format!("{deg} {min} {sec} {}", hem()?),
        FormatTemplate::HemisphereSuffixSeparated => format!("{deg} {min} {sec}{}", hem()?),
        FormatTemplate::HemisphereSuffixCompact => format!("{deg}{min}{sec}{}", hem()?),
        FormatTemplate::HemispherePrefixSymbols => format!(
            "{} {deg}{DEGREE_SIGN}{min}{ARC_MINUTE_SIGN}{sec}{ARC_SECOND_SIGN}",
            hem()?
        ),
        FormatTemplate::HemisphereSuffixSymbols => format!(
            "{deg}{DEGREE_SIGN}{min}{ARC_MINUTE_SIGN}{sec}{ARC_SECOND_SIGN} {}",
            hem()?
        ),
        FormatTemplate::Spaced => format!("{sign}{deg} {min} {sec}"),
        FormatTemplate::Compact => format!("{sign}{deg}{min}{sec}"),
    };

    Ok(formatted)
}
