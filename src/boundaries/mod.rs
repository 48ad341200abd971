use log::debug;

use geoloc_types::{Coordinate, DistanceUnit, InvalidCoordinate};

pub use self::bbox::BoundingBox;

mod bbox;
mod reflect;

/// Calculates the upper, lower, left and right coordinate boundaries
/// based on an origin point and a distance.
///
/// Every mutation of the inputs recalculates the boundaries immediately.
/// A mutation with an out of range origin is rejected as a whole:
/// both the inputs and the boundaries keep their last valid values.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CoordinateBoundaries {
    latitude: f64,
    longitude: f64,
    distance: f64,
    distance_unit: DistanceUnit,
    bbox: BoundingBox,
}

impl CoordinateBoundaries {
    /// Calculate the boundaries around the origin point.
    ///
    /// # Errors
    /// When the origin's latitude or longitude is out of range.
    pub fn new(
        origin: Coordinate,
        distance: f64,
        distance_unit: DistanceUnit,
    ) -> Result<Self, InvalidCoordinate> {
        Self::with_coordinates(origin.latitude, origin.longitude, distance, distance_unit)
    }

    /// Calculate the boundaries around the origin point given the distance in miles.
    ///
    /// # Errors
    /// When the origin's latitude or longitude is out of range.
    pub fn around(origin: Coordinate, distance: f64) -> Result<Self, InvalidCoordinate> {
        Self::new(origin, distance, DistanceUnit::default())
    }

    /// Calculate the boundaries around the origin point
    /// given with its latitude and longitude in decimal degrees.
    ///
    /// # Errors
    /// When the latitude or the longitude is out of range.
    pub fn with_coordinates(
        latitude: f64,
        longitude: f64,
        distance: f64,
        distance_unit: DistanceUnit,
    ) -> Result<Self, InvalidCoordinate> {
        let bbox = BoundingBox::around(latitude, longitude, distance, distance_unit)?;
        Ok(Self {
            latitude,
            longitude,
            distance,
            distance_unit,
            bbox,
        })
    }

    /// The origin point latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The origin point longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The origin point
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// The distance from the origin point
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The unit of the distance
    pub fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// The lower latitude boundary in decimal degrees
    pub fn min_latitude(&self) -> f64 {
        self.bbox.min_latitude()
    }

    /// The upper latitude boundary in decimal degrees
    pub fn max_latitude(&self) -> f64 {
        self.bbox.max_latitude()
    }

    /// The left longitude boundary in decimal degrees
    pub fn min_longitude(&self) -> f64 {
        self.bbox.min_longitude()
    }

    /// The right longitude boundary in decimal degrees
    pub fn max_longitude(&self) -> f64 {
        self.bbox.max_longitude()
    }

    /// All four boundaries at once
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Move the origin to the other latitude.
    ///
    /// # Errors
    /// When the latitude is out of range. Nothing is changed then.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), InvalidCoordinate> {
        self.set_origin(Coordinate::new(latitude, self.longitude))
    }

    /// Move the origin to the other longitude.
    ///
    /// # Errors
    /// When the longitude is out of range. Nothing is changed then.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), InvalidCoordinate> {
        self.set_origin(Coordinate::new(self.latitude, longitude))
    }

    /// Move the origin to the other point.
    ///
    /// # Errors
    /// When the latitude or the longitude is out of range. Nothing is changed then.
    pub fn set_origin(&mut self, origin: Coordinate) -> Result<(), InvalidCoordinate> {
        let bbox = BoundingBox::around(
            origin.latitude,
            origin.longitude,
            self.distance,
            self.distance_unit,
        )
        .map_err(|err| {
            debug!("Origin {} rejected, keeping {}", origin, self.origin());
            err
        })?;

        self.latitude = origin.latitude;
        self.longitude = origin.longitude;
        self.bbox = bbox;
        Ok(())
    }

    /// Change the distance from the origin point
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
        self.recalculate();
    }

    /// Change the unit of the distance keeping its numeric value
    pub fn set_distance_unit(&mut self, distance_unit: DistanceUnit) {
        self.distance_unit = distance_unit;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        match BoundingBox::around(
            self.latitude,
            self.longitude,
            self.distance,
            self.distance_unit,
        ) {
            Ok(bbox) => self.bbox = bbox,
            // unreachable while the stored origin is always valid
            Err(err) => debug!("Stale origin is left unchanged: {}", err),
        }
    }
}
