use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ang::Degrees;
use crate::distance::{self, EARTH_RADIUS_KM};
use crate::error::ValidationError;
use crate::lng_lat::{Latitude, Longitude};
use crate::unit::DistanceUnit;

/// A validated point on the Earth.
///
/// The only way to build one from raw floats is [`GeoPoint::new_checked`] (or the equivalent
/// `TryFrom`/deserialize paths), so every instance has a latitude within [-90, 90] and a
/// longitude within [-180, 180]. There are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "deepsize", derive(deepsize::DeepSizeOf))]
pub struct GeoPoint {
    latitude: Latitude,
    longitude: Longitude,
}

impl GeoPoint {
    /// Assembles a [`GeoPoint`] from an already validated [`Latitude`] and [`Longitude`].
    pub const fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Assembles a [`GeoPoint`] from a latitude and longitude as [`f64`]'s.
    ///
    /// The latitude is checked first. If both are invalid, only the latitude error is
    /// returned.
    pub fn new_checked(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let result = Latitude::new_checked(latitude)
            .and_then(|lat| Longitude::new_checked(longitude).map(|lon| Self::new(lat, lon)));

        if let Err(ref error) = result {
            tracing::debug!(
                message = "rejected coordinate",
                latitude,
                longitude,
                %error
            );
        }

        result
    }

    /// Returns the [`Latitude`].
    pub const fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Returns the [`Longitude`].
    pub const fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Returns the latitude as an [`f64`].
    pub const fn latitude_f64(&self) -> f64 {
        self.latitude.get()
    }

    /// Returns the longitude as an [`f64`].
    pub const fn longitude_f64(&self) -> f64 {
        self.longitude.get()
    }

    /// Returns the latitude and longitude as a pair.
    pub const fn as_lat_lon(&self) -> (f64, f64) {
        (self.latitude.get(), self.longitude.get())
    }

    /// The central angle between two points, i.e the angle subtended at the center of the
    /// sphere by the great-circle arc between them.
    pub fn central_angle(&self, other: &Self) -> Degrees {
        Degrees::from_radians(distance::haversine_central_angle(self, other))
    }

    /// Great-circle distance on a sphere of radius `radius_km`, in kilometers.
    pub fn haversine_with_radius(&self, other: &Self, radius_km: f64) -> f64 {
        radius_km * distance::haversine_central_angle(self, other)
    }

    /// Great-circle distance on a sphere of radius [`EARTH_RADIUS_KM`], in kilometers.
    #[inline]
    pub fn distance_km(&self, other: &Self) -> f64 {
        self.haversine_with_radius(other, EARTH_RADIUS_KM)
    }

    /// Great-circle distance to `other`, expressed in `unit`.
    #[inline]
    pub fn distance_to(&self, other: &Self, unit: DistanceUnit) -> f64 {
        unit.convert_from_km(self.distance_km(other))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({}, {})", self.latitude, self.longitude)
    }
}

impl From<(Latitude, Longitude)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (Latitude, Longitude)) -> Self {
        Self::new(lat, lon)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = ValidationError;

    fn try_from(lat_lon: (f64, f64)) -> Result<Self, Self::Error> {
        Self::new_checked(lat_lon.0, lat_lon.1)
    }
}

#[cfg(any(test, feature = "random-geom"))]
mod point_rand_impls {
    use rand::Rng;
    use rand::distr::{Distribution, StandardUniform};

    use super::{GeoPoint, Latitude, Longitude};

    impl Distribution<GeoPoint> for StandardUniform {
        fn sample<R>(&self, rng: &mut R) -> GeoPoint
        where
            R: Rng + ?Sized,
        {
            let latitude = Latitude::random_from(rng);
            let longitude = Longitude::random_from(rng);

            GeoPoint {
                latitude,
                longitude,
            }
        }
    }

    impl GeoPoint {
        pub fn random() -> Self {
            rand::random()
        }

        pub fn random_from<R>(rng: &mut R) -> Self
        where
            R: Rng + ?Sized,
        {
            rng.random()
        }
    }
}
