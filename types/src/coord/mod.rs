use std::{borrow::Cow, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::DEGREE_SIGN,
    errors::{InvalidCoordinate, ParseCoordinateError},
    utils::StripChar,
};

pub use self::validator::{
    check_coordinate, validate_coordinate, validate_latitude, validate_longitude,
};

mod validator;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface, represented as the pair (latitude, longitude)
/// in decimal degrees.
///
/// The range of the values is not checked on construction,
/// use [`Coordinate::is_valid`] or [`validate_coordinate`].
pub struct Coordinate {
    /// Degrees north (positive) or south (negative) of the equator
    pub latitude: f64,
    /// Degrees east (positive) or west (negative) of the prime meridian
    pub longitude: f64,
}

/// Construct a coordinate from the latitude and the longitude
pub fn make_coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude)
}

impl Coordinate {
    /// Construct a coordinate from the latitude and the longitude
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Are both the latitude and the longitude in range?
    pub fn is_valid(self) -> bool {
        validate_coordinate(self.latitude, self.longitude)
    }

    /// Return the coordinate back if it is in range.
    ///
    /// # Errors
    /// When either the latitude or the longitude is out of range.
    pub fn validated(self) -> Result<Self, InvalidCoordinate> {
        check_coordinate(self.latitude, self.longitude).map(|()| self)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(pair: (f64, f64)) -> Self {
        let (latitude, longitude) = pair;
        Self::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        let [latitude, longitude] = pair;
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.latitude, coord.longitude)
    }
}

lazy_static! {
    static ref RE_DELIMITED: Regex =
        Regex::new(r"^\s*(?P<lat>[^,;]+?)\s*[,;]\s*(?P<lon>[^,;]+?)\s*$")
            .expect("Delimited regex is valid");
    static ref RE_SPACED: Regex =
        Regex::new(r"^\s*(?P<lat>\S+(?:\x20[NS])?)\s+(?P<lon>\S+(?:\x20[EW])?)\s*$")
            .expect("Space-separated regex is valid");
}

/// Parse a single component of the pair, e.g. `-34.5`, `34.5°`, `34.5° S` or `34.5S`
fn parse_degrees(s: &str, positive: char, negative: char) -> Result<f64, ParseCoordinateError> {
    let (value, hemisphere) = match s.split_last() {
        Some((rest, last)) if last == positive || last == negative => {
            // single space is allowed
            let rest = rest.strip_suffix_char(' ').unwrap_or(rest);
            (Cow::Owned(rest), Some(last == positive))
        }
        _ => (Cow::Borrowed(s), None),
    };

    let value = value
        .strip_suffix_char(DEGREE_SIGN)
        .map_or(value, Cow::Owned);
    if value.is_empty() {
        return Err(ParseCoordinateError::Notation);
    }

    let degrees: f64 = value.parse()?;
    match hemisphere {
        None => Ok(degrees),
        Some(_) if value.starts_with(['-', '+']) => Err(ParseCoordinateError::Hemisphere),
        Some(true) => Ok(degrees),
        Some(false) => Ok(-degrees),
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse the `latitude, longitude` pair in decimal degrees.
    /// The components can be separated with a comma, a semicolon or a whitespace
    /// and can have the degree sign and the hemisphere letter (N, S, E, W).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let capture = RE_DELIMITED
            .captures(s)
            .or_else(|| RE_SPACED.captures(s))
            .ok_or(ParseCoordinateError::Notation)?;
        let lat = capture.name("lat").ok_or(ParseCoordinateError::Notation)?;
        let lon = capture.name("lon").ok_or(ParseCoordinateError::Notation)?;

        let latitude = parse_degrees(lat.as_str(), 'N', 'S')?;
        let longitude = parse_degrees(lon.as_str(), 'E', 'W')?;
        Ok(Self::new(latitude, longitude).validated()?)
    }
}

/// Write the absolute value and the hemisphere letter, if any
fn fmt_hemisphere(
    f: &mut fmt::Formatter<'_>,
    degrees: f64,
    positive: char,
    negative: char,
) -> fmt::Result {
    write!(f, "{}{}", degrees.abs(), DEGREE_SIGN)?;
    if degrees > 0.0 {
        write!(f, "{positive}")
    } else if degrees < 0.0 {
        write!(f, "{negative}")
    } else {
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: ")?;
            fmt_hemisphere(f, self.latitude, 'N', 'S')?;
            write!(f, ", Long: ")?;
            fmt_hemisphere(f, self.longitude, 'E', 'W')
        } else {
            write!(
                f,
                "({}{sign},{}{sign})",
                self.latitude,
                self.longitude,
                sign = DEGREE_SIGN
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality() {
        let a = make_coordinate(34.067_591_8, -118.397_709_1);
        let b = Coordinate::new(34.067_591_8, -118.397_709_1);
        assert_eq!(a, b);
        assert_ne!(a, Coordinate::new(34.067_591_8, 118.397_709_1));
    }

    #[test]
    fn out_of_range_can_be_constructed() {
        let c = make_coordinate(97.067_591_8, -118.397_709_1);
        assert!(!c.is_valid());
        assert_eq!(
            c.validated(),
            Err(InvalidCoordinate {
                latitude: 97.067_591_8,
                longitude: -118.397_709_1
            })
        );
    }

    #[test]
    fn from_tuple_and_array() {
        let c: Coordinate = (35.076_234, -118.907_868_7).into();
        let c2: Coordinate = [35.076_234, -118.907_868_7].into();
        assert_eq!(c, c2);

        let (lat, lon) = c.into();
        assert_eq!(lat, 35.076_234);
        assert_eq!(lon, -118.907_868_7);
    }

    #[test]
    fn default_is_origin() {
        let c = Coordinate::default();
        assert_eq!(c, Coordinate::new(0.0, 0.0));
        assert!(c.is_valid());
    }

    #[test]
    fn display() {
        let c = Coordinate::new(34.067_591_8, -118.397_709_1);
        assert_eq!(format!("{}", c), "(34.0675918°,-118.3977091°)");
        assert_eq!(format!("{:#}", c), "Lat: 34.0675918°N, Long: 118.3977091°W");
    }

    #[test]
    fn display_origin_without_hemispheres() {
        let c = Coordinate::default();
        assert_eq!(format!("{}", c), "(0°,0°)");
        assert_eq!(format!("{:#}", c), "Lat: 0°, Long: 0°");
    }

    #[test]
    fn display_south_east() {
        let c = Coordinate::new(-33.45, 70.5);
        assert_eq!(format!("{:#}", c), "Lat: 33.45°S, Long: 70.5°E");
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn comma_separated() {
        let c: Coordinate = "34.0675918,-118.3977091".parse().unwrap();
        assert_eq!(c, Coordinate::new(34.067_591_8, -118.397_709_1));
    }

    #[test]
    fn comma_and_spaces() {
        let c: Coordinate = "  34.0675918 , -118.3977091 ".parse().unwrap();
        assert_eq!(c, Coordinate::new(34.067_591_8, -118.397_709_1));
    }

    #[test]
    fn semicolon_separated() {
        let c: Coordinate = "-33.45;70.5".parse().unwrap();
        assert_eq!(c, Coordinate::new(-33.45, 70.5));
    }

    #[test]
    fn space_separated() {
        let c: Coordinate = "-33.45 70.5".parse().unwrap();
        assert_eq!(c, Coordinate::new(-33.45, 70.5));
    }

    #[test]
    fn degree_signs() {
        let c: Coordinate = "34.5°, -118.25°".parse().unwrap();
        assert_eq!(c, Coordinate::new(34.5, -118.25));
    }

    #[test]
    fn hemispheres() {
        let c: Coordinate = "34.5° N, 118.25° W".parse().unwrap();
        assert_eq!(c, Coordinate::new(34.5, -118.25));

        let c2: Coordinate = "33.45S 70.5E".parse().unwrap();
        assert_eq!(c2, Coordinate::new(-33.45, 70.5));
    }

    #[test]
    fn hemispheres_with_spaces_and_no_comma() {
        let c: Coordinate = "34.5° N 118.25° W".parse().unwrap();
        assert_eq!(c, Coordinate::new(34.5, -118.25));
    }

    #[test]
    fn bounds_are_parsed() {
        let c: Coordinate = "90, -180".parse().unwrap();
        assert_eq!(c, Coordinate::new(90.0, -180.0));
    }

    #[test]
    #[should_panic(expected = "EmptyString")]
    fn empty() {
        let _c: Coordinate = "   ".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn single_number() {
        let _c: Coordinate = "34.5".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn three_numbers() {
        let _c: Coordinate = "34.5, 12.1, 15".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Float")]
    fn not_a_number() {
        let _c: Coordinate = "north, 12.1".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Hemisphere")]
    fn sign_and_hemisphere() {
        let _c: Coordinate = "-34.5S, 12.1".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn hemisphere_only() {
        let _c: Coordinate = "N, 12.1".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Range")]
    fn latitude_out_of_range() {
        let _c: Coordinate = "97.0675918, -118.3977091".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Range")]
    fn longitude_out_of_range() {
        let _c: Coordinate = "34.0675918, -187.3977091".parse().unwrap();
    }
}
