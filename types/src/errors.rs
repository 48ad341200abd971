use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The latitude or the longitude of a point is not in the legal range:
/// `-90 <= lat <= 90` and `-180 <= lon <= 180`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InvalidCoordinate {
    /// The rejected latitude
    pub latitude: f64,
    /// The rejected longitude
    pub longitude: f64,
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates supplied: ({}, {}) is out of range",
            self.latitude, self.longitude
        )
    }
}

impl Error for InvalidCoordinate {}

#[derive(Debug)]
/// The reasons a string cannot be read as a coordinate pair
pub enum ParseCoordinateError {
    /// Nothing to parse
    EmptyString,
    /// Not a `latitude, longitude` pair
    Notation,
    /// Both a minus sign and a hemisphere letter provided
    Hemisphere,
    /// One of the components is not a number
    Float(ParseFloatError),
    /// The numbers are parsed, but the point is out of range
    Range(InvalidCoordinate),
}

enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);
enum_trivial_from_impl!(InvalidCoordinate => ParseCoordinateError:Range);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::Notation => write!(f, "expected the `latitude, longitude` pair"),
            Self::Hemisphere => write!(f, "the sign conflicts with the hemisphere"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Range(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Range(inner) => Some(inner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unknown name of a distance unit
pub struct ParseUnitError {
    failed: String,
}

impl ParseUnitError {
    pub(crate) fn new(failed: &str) -> Self {
        Self {
            failed: failed.to_string(),
        }
    }
}

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse DistanceUnit from {:?}", self.failed)
    }
}

impl Error for ParseUnitError {}
