/// The southern and northern bound of a latitude, in decimal degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// The western and eastern bound of a longitude, in decimal degrees
pub const MAX_LONGITUDE: f64 = 180.0;

pub(crate) const MILES_PER_DEGREE: f64 = 69.0;
pub(crate) const KILOMETERS_PER_DEGREE: f64 = 111.045;
pub(crate) const METERS_PER_DEGREE: f64 = 111_045.0;
pub(crate) const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

pub(crate) const DEGREE_SIGN: char = '°';
