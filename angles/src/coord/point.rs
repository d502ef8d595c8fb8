use std::fmt;

use crate::angle::{AngleKind, AngleValue, FormatAngleError, FormatTemplate, NotValid};

#[derive(Debug, Clone, PartialEq)]
/// The position given as the pair of the independently parsed (latitude, longitude)
pub struct Coordinates {
    lat: AngleValue,
    lon: AngleValue,
}

impl Coordinates {
    /// Recognize the texts as the latitude and the longitude
    pub fn parse(lat: &str, lon: &str) -> Self {
        Self {
            lat: AngleValue::parse(lat, AngleKind::Latitude),
            lon: AngleValue::parse(lon, AngleKind::Longitude),
        }
    }

    /// The latitude part
    pub const fn latitude(&self) -> &AngleValue {
        &self.lat
    }

    /// The longitude part
    pub const fn longitude(&self) -> &AngleValue {
        &self.lon
    }

    /// Are both parts valid
    pub const fn is_valid(&self) -> bool {
        self.lat.is_valid() && self.lon.is_valid()
    }

    /// The (latitude, longitude) pair in the decimal degrees.
    ///
    /// # Errors
    /// The first invalid part.
    pub fn decimal_degrees(&self) -> Result<(f64, f64), NotValid> {
        Ok((self.lat.decimal_degrees()?, self.lon.decimal_degrees()?))
    }

    /// The messages of all the invalid parts joined with `; `
    pub fn error_message(&self) -> Option<String> {
        let messages: Vec<_> = [&self.lat, &self.lon]
            .iter()
            .filter_map(|part| part.error_message())
            .collect();

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }

    /// Render both parts in the same template.
    ///
    /// # Errors
    /// Some part is invalid or cannot be rendered in the template.
    pub fn to_dms(
        &self,
        template: FormatTemplate,
        precision: u8,
    ) -> Result<(String, String), FormatAngleError> {
        Ok((
            self.lat.to_dms(template, precision)?,
            self.lon.to_dms(template, precision)?,
        ))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:#}, Long: {:#}", self.lat, self.lon)
        } else {
            write!(f, "({},{})", self.lat, self.lon)
        }
    }
}
