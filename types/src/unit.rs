use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        KILOMETERS_PER_DEGREE, METERS_PER_DEGREE, MILES_PER_DEGREE, NAUTICAL_MILES_PER_DEGREE,
    },
    errors::ParseUnitError,
};

use self::DistanceUnit::{Kilometers, Meters, Miles, NauticalMiles};

/// The unit in which a distance from the origin is measured.
///
/// Every unit is tied to the length of a single degree of latitude,
/// which is considered constant all over the globe.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    Miles,
    /// Kilometers
    Kilometers,
    /// Meters
    Meters,
    /// International nautical miles
    NauticalMiles,
}

impl DistanceUnit {
    /// All the supported units
    pub const ALL: [Self; 4] = [Miles, Kilometers, Meters, NauticalMiles];

    /// How many units are in a single degree of latitude
    pub const fn per_degree_latitude(self) -> f64 {
        match self {
            Miles => MILES_PER_DEGREE,
            Kilometers => KILOMETERS_PER_DEGREE,
            Meters => METERS_PER_DEGREE,
            NauticalMiles => NAUTICAL_MILES_PER_DEGREE,
        }
    }

    /// How many degrees of latitude the distance spans
    pub fn degrees_of_latitude(self, distance: f64) -> f64 {
        distance / self.per_degree_latitude()
    }

    /// Express the distance measured in the current units in the other ones
    pub fn convert(self, distance: f64, to: Self) -> f64 {
        if self == to {
            return distance;
        }
        self.degrees_of_latitude(distance) * to.per_degree_latitude()
    }

    /// The short symbol of the unit
    pub const fn symbol(self) -> &'static str {
        match self {
            Miles => "mi",
            Kilometers => "km",
            Meters => "m",
            NauticalMiles => "nmi",
        }
    }

    /// The full name of the unit
    pub const fn name(self) -> &'static str {
        match self {
            Miles => "miles",
            Kilometers => "kilometers",
            Meters => "meters",
            NauticalMiles => "nautical miles",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "mi" | "mile" | "miles" => Ok(Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Kilometers),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Meters),
            "nmi" | "nm" | "nautical mile" | "nautical miles" | "nauticalmiles" => {
                Ok(NauticalMiles)
            }
            _ => Err(ParseUnitError::new(s)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}", self.symbol())
        }
    }
}
