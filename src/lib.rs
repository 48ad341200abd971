//! Latitude/longitude bounding box around an origin point.
//!
//! The box encloses every point within the given distance of the origin.
//! The length of a degree of longitude is corrected for the latitude of the origin,
//! and the bounds passing over a pole or the antimeridian are reflected back into range.
//!
//! ```
//! use geoloc::{make_coordinate, CoordinateBoundaries, DistanceUnit};
//!
//! let origin = make_coordinate(34.067_591_8, -118.397_709_1);
//! let mut boundaries = CoordinateBoundaries::new(origin, 10.0, DistanceUnit::Miles).unwrap();
//! assert!((boundaries.min_latitude() - 33.9227).abs() < 1e-4);
//!
//! boundaries.set_distance_unit(DistanceUnit::Kilometers);
//! assert!(boundaries.min_latitude() > 33.9227);
//!
//! assert!(boundaries.set_latitude(97.067_591_8).is_err());
//! assert_eq!(boundaries.latitude(), 34.067_591_8);
//! ```

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// exact float comparisons are intended in tests
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(test, allow(macro_use_extern_crate))]

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub use boundaries::{BoundingBox, CoordinateBoundaries};
pub use geoloc_types::{
    check_coordinate, make_coordinate, validate_coordinate, validate_latitude, validate_longitude,
    Coordinate, DistanceUnit, InvalidCoordinate, ParseCoordinateError, ParseUnitError,
    MAX_LATITUDE, MAX_LONGITUDE,
};

mod boundaries;
