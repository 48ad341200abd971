use std::fmt;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geoloc_types::{
    check_coordinate, validate_latitude, validate_longitude, Coordinate, DistanceUnit,
    InvalidCoordinate, MAX_LATITUDE, MAX_LONGITUDE,
};

use super::reflect::{reflect_above, reflect_below};

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The rectangular region in the latitude/longitude space.
///
/// When a bound has been reflected over the pole or the antimeridian,
/// the minimum becomes greater than the maximum.
pub struct BoundingBox {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl BoundingBox {
    /// Calculate the box enclosing every point within the `distance` from the origin.
    ///
    /// The length of a degree of longitude is corrected with the cosine of the origin's latitude,
    /// the bounds passing over the coordinate's range are reflected back once.
    ///
    /// # Errors
    /// When the origin's latitude or longitude is out of range.
    pub fn around(
        latitude: f64,
        longitude: f64,
        distance: f64,
        unit: DistanceUnit,
    ) -> Result<Self, InvalidCoordinate> {
        check_coordinate(latitude, longitude)?;

        let lat_delta = unit.degrees_of_latitude(distance);
        // infinitesimal cosine near the poles makes the delta enormous
        let lon_delta = lat_delta / latitude.to_radians().cos().abs();
        if latitude.abs() == MAX_LATITUDE {
            warn!(
                "Longitude span is undefined at the pole {}, got delta {}",
                latitude, lon_delta
            );
        }

        let bbox = Self {
            min_latitude: reflect_below(latitude - lat_delta, MAX_LATITUDE),
            max_latitude: reflect_above(latitude + lat_delta, MAX_LATITUDE),
            min_longitude: reflect_below(longitude - lon_delta, MAX_LONGITUDE),
            max_longitude: reflect_above(longitude + lon_delta, MAX_LONGITUDE),
        };

        let reflected_in_range = validate_latitude(bbox.min_latitude)
            && validate_latitude(bbox.max_latitude)
            && validate_longitude(bbox.min_longitude)
            && validate_longitude(bbox.max_longitude);
        if !reflected_in_range {
            warn!(
                "The distance {} {} is too large to fit the bounds around ({}, {}): {}",
                distance, unit, latitude, longitude, bbox
            );
        }

        debug!(
            "Bounding box around ({}, {}) within {} {}: {}",
            latitude, longitude, distance, unit, bbox
        );
        Ok(bbox)
    }

    /// The lower latitude bound
    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    /// The upper latitude bound
    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// The left longitude bound
    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    /// The right longitude bound
    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// The corner with both minimal bounds
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.min_latitude, self.min_longitude)
    }

    /// The corner with both maximal bounds
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.max_latitude, self.max_longitude)
    }

    /// Is the longitude bound reflected over the antimeridian?
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_longitude > self.max_longitude
    }

    /// Is the latitude bound reflected over a pole?
    pub fn crosses_pole(&self) -> bool {
        self.min_latitude > self.max_latitude
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#} - {:#}", self.south_west(), self.north_east())
        } else {
            write!(f, "[{}, {}]", self.south_west(), self.north_east())
        }
    }
}
