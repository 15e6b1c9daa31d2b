//! Haversine great-circle distances.
//!
//! Earth is treated as a sphere of radius [`EARTH_RADIUS_KM`]. That's a deliberate
//! approximation: results can be off by up to ~0.5% from an ellipsoidal geodesic.

use crate::error::ValidationError;
use crate::point::GeoPoint;
use crate::unit::DistanceUnit;

/// Mean radius of the Earth, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the central angle (in radians) between two points with the Haversine formula:
///
/// ```text
/// a = sin²(Δlat / 2) + cos(lat1) · cos(lat2) · sin²(Δlon / 2)
/// c = 2 · atan2(√a, √(1 − a))
/// ```
pub(crate) fn haversine_central_angle(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    let lat1 = origin.latitude().to_radians();
    let lon1 = origin.longitude().to_radians();
    let lat2 = destination.latitude().to_radians();
    let lon2 = destination.longitude().to_radians();

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let delta_lat_sin = (delta_lat / 2.0).sin();
    let delta_lon_sin = (delta_lon / 2.0).sin();

    let a_term_1 = delta_lat_sin * delta_lat_sin;
    let a_term_2 = lat1.cos() * lat2.cos() * delta_lon_sin * delta_lon_sin;

    // rounding can push near-antipodal pairs just past 1.0, which would make sqrt(1 - a) NaN
    let a = (a_term_1 + a_term_2).clamp(0.0, 1.0);

    2.0 * f64::atan2(a.sqrt(), (1.0 - a).sqrt())
}

/// Computes the great-circle distance between `origin` and `destination`, in `unit`.
///
/// `unit` is either a [`DistanceUnit`] (which can't fail), or a token like `"km"` or `"mi"`,
/// which returns [`ValidationError::InvalidUnit`] if it isn't one of `km`, `m`, `mi`, `nm`,
/// `yd` or `ft`.
pub fn compute_distance<U>(
    origin: GeoPoint,
    destination: GeoPoint,
    unit: U,
) -> Result<f64, ValidationError>
where
    U: TryInto<DistanceUnit>,
    ValidationError: From<U::Error>,
{
    let unit = unit.try_into()?;
    Ok(origin.distance_to(&destination, unit))
}
