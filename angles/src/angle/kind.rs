//! Kinds of the aviation angles and the domain rules associated with them

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bool_enum,
    coord::{Pole, RotationalDirection},
};

use super::{
    consts::{FULL_TURN_DEG, HALF_TURN_DEG, QUARTER_TURN_DEG},
    errors::{OutOfRange, ParseAngleKindError},
};

bool_enum!(
    /// The direction of an angle relative to zero
    Sign: Positive and Negative; parse from '+':'-' with ParseSignError
);

impl Sign {
    /// `1.0` for the positive and `-1.0` for the negative
    pub const fn signum(self) -> f64 {
        match self {
            Positive => 1.0,
            Negative => -1.0,
        }
    }
}

impl From<Pole> for Sign {
    fn from(pole: Pole) -> Self {
        bool::from(pole).into()
    }
}

impl From<RotationalDirection> for Sign {
    fn from(direction: RotationalDirection) -> Self {
        bool::from(direction).into()
    }
}

/// What the angle is measured for.
///
/// The kind defines the legal range of the values,
/// the width of the degrees field in the compact notations
/// and the set of the hemisphere letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleKind {
    /// `[-90..=90]`, the hemispheres are `N` and `S`
    Latitude,
    /// `[-180..=180]`, the hemispheres are `E` and `W`
    Longitude,
    /// `[0..360)`, no hemispheres
    Bearing,
}

impl AngleKind {
    /// All the supported kinds
    pub const ALL: [Self; 3] = [Self::Latitude, Self::Longitude, Self::Bearing];

    /// The number of digits of the degrees in the compact notations
    pub const fn degree_width(self) -> usize {
        match self {
            Self::Latitude => 2,
            Self::Longitude | Self::Bearing => 3,
        }
    }

    /// The maximum absolute value of the whole degrees
    pub const fn max_degrees(self) -> u16 {
        match self {
            Self::Latitude => QUARTER_TURN_DEG,
            Self::Longitude => HALF_TURN_DEG,
            Self::Bearing => FULL_TURN_DEG,
        }
    }

    /// Is the decimal degrees value legal for the kind
    pub fn contains(self, dd: f64) -> bool {
        let max = f64::from(self.max_degrees());
        match self {
            Self::Latitude | Self::Longitude => (-max..=max).contains(&dd),
            // due north is 0, not 360
            Self::Bearing => (0.0..max).contains(&dd),
        }
    }

    /// Pass the legal value through or reject it.
    ///
    /// # Errors
    /// The value is outside of the [range](#method.contains) of the kind.
    pub fn check_range(self, dd: f64) -> Result<f64, OutOfRange> {
        if self.contains(dd) {
            Ok(dd)
        } else {
            Err(OutOfRange {
                value: dd,
                kind: self,
            })
        }
    }

    pub(crate) const fn range_notation(self) -> &'static str {
        match self {
            Self::Latitude => "[-90, 90]",
            Self::Longitude => "[-180, 180]",
            Self::Bearing => "[0, 360)",
        }
    }

    /// The letters of the positive and the negative hemispheres
    pub const fn hemisphere_letters(self) -> Option<[char; 2]> {
        match self {
            Self::Latitude => Some([Pole::North.symbol(), Pole::South.symbol()]),
            Self::Longitude => Some([
                RotationalDirection::East.symbol(),
                RotationalDirection::West.symbol(),
            ]),
            Self::Bearing => None,
        }
    }

    /// The letter of the hemisphere where the angle with the given sign belongs
    pub fn hemisphere(self, sign: Sign) -> Option<char> {
        let positive = bool::from(sign);
        match self {
            Self::Latitude => Some(Pole::from(positive).symbol()),
            Self::Longitude => Some(RotationalDirection::from(positive).symbol()),
            Self::Bearing => None,
        }
    }

    /// The sign of the angle in the hemisphere with the given letter.
    /// Only the letters of the kind's own hemispheres are recognized.
    pub fn sign_of_hemisphere(self, letter: char) -> Option<Sign> {
        match self {
            Self::Latitude => Pole::try_from(letter).ok().map(Sign::from),
            Self::Longitude => RotationalDirection::try_from(letter).ok().map(Sign::from),
            Self::Bearing => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Bearing => "bearing",
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AngleKind {
    type Err = ParseAngleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(Self::Latitude),
            "lon" | "long" | "longitude" => Ok(Self::Longitude),
            "brg" | "brng" | "bearing" => Ok(Self::Bearing),
            _ => Err(ParseAngleKindError(s.to_string())),
        }
    }
}
