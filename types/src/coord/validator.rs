//! Range checks for the decimal degrees.
//! Both bounds are inclusive and `NaN` is never in range.

use crate::{
    consts::{MAX_LATITUDE, MAX_LONGITUDE},
    errors::InvalidCoordinate,
};

/// Is the latitude in the range `-90 <= lat <= 90`?
pub fn validate_latitude(latitude: f64) -> bool {
    let valid_latitudes = -MAX_LATITUDE..=MAX_LATITUDE;
    valid_latitudes.contains(&latitude)
}

/// Is the longitude in the range `-180 <= lon <= 180`?
pub fn validate_longitude(longitude: f64) -> bool {
    let valid_longitudes = -MAX_LONGITUDE..=MAX_LONGITUDE;
    valid_longitudes.contains(&longitude)
}

/// Are both the latitude and the longitude in their legal ranges?
pub fn validate_coordinate(latitude: f64, longitude: f64) -> bool {
    validate_latitude(latitude) && validate_longitude(longitude)
}

/// Same as [`validate_coordinate`], but reports the offending pair.
///
/// # Errors
/// When either of the values is out of range.
pub fn check_coordinate(latitude: f64, longitude: f64) -> Result<(), InvalidCoordinate> {
    if validate_coordinate(latitude, longitude) {
        Ok(())
    } else {
        Err(InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}
