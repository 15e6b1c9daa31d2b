#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
//! Great-circle distances between points on a spherical Earth.
//!
//! Points are validated once, when a [`GeoPoint`] is built. Distances are computed with the
//! Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`], and converted into any of the
//! [`DistanceUnit`]s.
//!
//! ```
//! use geodistance::{DistanceUnit, compute_distance, create_geo_point};
//!
//! let nyc = create_geo_point(40.7128, -74.0060)?;
//! let london = create_geo_point(51.5074, -0.1278)?;
//!
//! let km = compute_distance(nyc, london, DistanceUnit::Kilometers)?;
//! assert!((km - 5570.0).abs() < 5.0);
//!
//! // units can also be given as their string tokens
//! let mi = compute_distance(nyc, london, "mi")?;
//! assert!((mi - 3461.0).abs() < 5.0);
//! # Ok::<(), geodistance::ValidationError>(())
//! ```

pub mod ang;
pub mod distance;
pub mod error;
pub mod lng_lat;
pub mod point;
pub mod unit;

pub use distance::{EARTH_RADIUS_KM, compute_distance};
pub use error::{InvalidValue, ValidationError};
pub use lng_lat::{CoordinateType, Latitude, Longitude};
pub use point::GeoPoint;
pub use unit::DistanceUnit;

/// Builds a validated [`GeoPoint`]. Latitude is validated before longitude, so if both are
/// invalid only [`ValidationError::OutOfRangeLatitude`] is returned.
#[inline]
pub fn create_geo_point(latitude: f64, longitude: f64) -> Result<GeoPoint, ValidationError> {
    GeoPoint::new_checked(latitude, longitude)
}
