//! The registry of the supported textual layouts of an angle
//! and the matcher picking the first layout which accepts the text.
//!
//! The order of the layouts matters: the fixed-width compact notations
//! go before the looser separated ones, and the decimal notation is the last resort.

use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

use super::kind::{AngleKind, Sign};

/// The textual layout of an angle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `DDMMSS[.f]` for latitude, `DDDMMSS[.f]` for longitude and bearing
    DmsCompact,
    /// `DDMM[.f]` for latitude, `DDDMM[.f]` for longitude and bearing
    DmCompact,
    /// `DD MM SS[.f]`, the degrees have the fixed width
    DmsSpaced,
    /// `DD-MM-SS[.f]`, the degrees have the fixed width
    DmsHyphenated,
    /// `D°M′S″`, `D:M:S`, `D M S` or any mix of the separators, the widths may vary
    DmsSeparated,
    /// `D[.f][°]`, either part around the decimal point may be omitted: `45.`, `.5`
    Decimal,
}

impl Layout {
    /// All the layouts in the order of matching
    pub const ALL: [Self; 6] = [
        Self::DmsCompact,
        Self::DmCompact,
        Self::DmsSpaced,
        Self::DmsHyphenated,
        Self::DmsSeparated,
        Self::Decimal,
    ];

    /// How the matched fields should be decomposed
    pub const fn path(self) -> Path {
        match self {
            Self::DmsCompact | Self::DmsSpaced | Self::DmsHyphenated | Self::DmsSeparated => {
                Path::Dms
            }
            Self::DmCompact => Path::Dm,
            Self::Decimal => Path::Decimal,
        }
    }

    fn value_re(self, kind: AngleKind) -> String {
        let width = kind.degree_width();
        match self {
            Self::DmsCompact => format!(
                r"(?P<deg>\d{{{width}}})(?P<min>\d{{2}})(?P<sec>\d{{2}}(?:\.\d+)?)"
            ),
            Self::DmCompact => format!(r"(?P<deg>\d{{{width}}})(?P<min>\d{{2}}(?:\.\d+)?)"),
            Self::DmsSpaced => format!(
                r"(?P<deg>\d{{{width}}})\x20(?P<min>\d{{2}})\x20(?P<sec>\d{{2}}(?:\.\d+)?)"
            ),
            Self::DmsHyphenated => format!(
                r"(?P<deg>\d{{{width}}})-(?P<min>\d{{2}})-(?P<sec>\d{{2}}(?:\.\d+)?)"
            ),
            Self::DmsSeparated => r#"
                (?P<deg>\d{1,3})                    # degrees VALUE
                (?:[°*:\-]\x20?|\x20)               # degree sign or a single space
                (?P<min>\d{1,2})                    # minutes VALUE
                (?:['′:\-]\x20?|\x20)               # arcminute sign or a single space
                (?P<sec>\d{1,2}(?:\.\d+)?)          # seconds VALUE with the optional decimal fraction
                (?:''|["″])?                        # optional arcsecond sign
            "#
            .to_string(),
            Self::Decimal => r"(?P<deg>\d+(?:\.\d*)?|\.\d+)°?".to_string(),
        }
    }
}

/// The way to convert the matched fields into numbers
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    /// Whole degrees, whole minutes, seconds with the optional fraction
    Dms,
    /// Whole degrees, minutes with the optional fraction
    Dm,
    /// Degrees with the optional fraction
    Decimal,
}

/// Construct regular expression to parse the given layout of the angle of the given kind
fn layout_re(layout: Layout, kind: AngleKind) -> String {
    let (prefix, suffix) = kind.hemisphere_letters().map_or_else(
        || (String::new(), String::new()),
        |[positive, negative]| {
            (
                format!(r"(?:(?P<hem_prefix>[{positive}{negative}])\x20?)?"),
                format!(r"(?:\x20?(?P<hem_suffix>[{positive}{negative}]))?"),
            )
        },
    );

    format!(
        r#"(?x)                             # enables verbose mode (to allow these comments)
        ^                                       # match the whole line from the start
        (?P<sign>[-+])?                         # optional sign, no space allowed after it
        {prefix}                                # optional hemisphere letter
        {value}
        {suffix}                                # optional hemisphere letter
        $                                       # match the whole line till the end
        "#,
        value = layout.value_re(kind),
    )
}

/// The layout with the recognizer for it
#[derive(Debug)]
pub struct Grammar {
    layout: Layout,
    re: Regex,
}

impl Grammar {
    fn new(layout: Layout, kind: AngleKind) -> Self {
        let re = Regex::new(&layout_re(layout, kind)).expect("Layout regex is valid");
        Self { layout, re }
    }

    /// The layout recognized by the grammar
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Extract the fields if the whole text is in the grammar's layout
    pub fn recognize<'t>(&self, text: &'t str) -> Option<Fields<'t>> {
        self.re.captures(text).map(|captures| Fields::from_captures(&captures))
    }
}

/// The ordered sets of the grammars for every angle kind
#[derive(Debug)]
pub struct PatternRegistry {
    latitude: Vec<Grammar>,
    longitude: Vec<Grammar>,
    bearing: Vec<Grammar>,
}

lazy_static! {
    static ref REGISTRY: PatternRegistry = PatternRegistry::build();
    static ref RE_PLAIN_DECIMAL: Regex =
        Regex::new(r"^[-+]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("Decimal regex is valid");
}

impl PatternRegistry {
    fn build() -> Self {
        let grammars = |kind: AngleKind| -> Vec<Grammar> {
            Layout::ALL
                .iter()
                .map(|&layout| Grammar::new(layout, kind))
                .collect()
        };

        Self {
            latitude: grammars(AngleKind::Latitude),
            longitude: grammars(AngleKind::Longitude),
            bearing: grammars(AngleKind::Bearing),
        }
    }

    /// The process-wide registry, built on the first use
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// The grammars for the kind in the order they should be tried
    pub fn grammars_for(&self, kind: AngleKind) -> &[Grammar] {
        match kind {
            AngleKind::Latitude => &self.latitude,
            AngleKind::Longitude => &self.longitude,
            AngleKind::Bearing => &self.bearing,
        }
    }
}

/// The raw parts of the text recognized by a grammar
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fields<'t> {
    /// Explicit `+` or `-`
    pub sign: Option<Sign>,
    /// The degrees digits (with the fraction for the decimal layout)
    pub degrees: &'t str,
    /// The minutes digits (with the fraction for the DM layout)
    pub minutes: Option<&'t str>,
    /// The seconds digits with the optional fraction
    pub seconds: Option<&'t str>,
    /// The hemisphere letter before the value
    pub hem_prefix: Option<char>,
    /// The hemisphere letter after the value
    pub hem_suffix: Option<char>,
}

impl<'t> Fields<'t> {
    fn from_captures(captures: &Captures<'t>) -> Self {
        let group = |name| captures.name(name).map(|m| m.as_str());
        let first_char = |name| group(name).and_then(|s| s.chars().next());

        Self {
            sign: first_char("sign").and_then(|ch| Sign::try_from(ch).ok()),
            degrees: group("deg").unwrap_or_default(),
            minutes: group("min"),
            seconds: group("sec"),
            hem_prefix: first_char("hem_prefix"),
            hem_suffix: first_char("hem_suffix"),
        }
    }
}

/// The first grammar which accepted the text and its fields
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatchResult<'t> {
    /// The layout of the matched grammar
    pub layout: Layout,
    /// The extracted fields
    pub fields: Fields<'t>,
}

/// Try every grammar for the kind in the registry order.
///
/// The text is expected to be [normalized](fn.normalize.html) already.
pub fn match_notation(text: &str, kind: AngleKind) -> Option<MatchResult<'_>> {
    PatternRegistry::global()
        .grammars_for(kind)
        .iter()
        .find_map(|grammar| {
            let fields = grammar.recognize(text);
            trace!(
                "{kind} layout {:?} {} {text:?}",
                grammar.layout(),
                if fields.is_some() { "matches" } else { "does not match" }
            );
            fields.map(|fields| MatchResult {
                layout: grammar.layout(),
                fields,
            })
        })
}

/// The value of the text if it is nothing but a signed decimal number
pub(crate) fn plain_decimal(text: &str) -> Option<f64> {
    if RE_PLAIN_DECIMAL.is_match(text) {
        text.parse().ok()
    } else {
        None
    }
}
