//! [`Latitude`] and [`Longitude`] definitions

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;
use std::ops::Sub;
use std::str::FromStr;

use serde::{Deserialize, Serialize, de, ser};

use crate::ang::Degrees;
use crate::error::{InvalidValue, ValidationError};

macro_rules! impl_lat_lon {
    ($(($name:ident: $min:expr => $max:expr)),* $(,)?) => {
        $(
            #[doc = concat!(
                " A valid ",
                stringify!($name),
                " on the Earth, in degrees.\n\n",
                " Thin wrapper around an [`f64`], which validates that the value is not\n",
                " [`f64::NAN`], [`f64::INFINITY`], [`f64::NEG_INFINITY`], or outside of the\n",
                " range of valid values for this coordinate type ([",
                stringify!($min),
                ", ",
                stringify!($max),
                "])",
            )]
            #[repr(transparent)]
            #[derive(Default, Clone, Copy)]
            pub struct $name(f64);

            #[cfg(feature = "deepsize")]
            deepsize::known_deep_size!(0; $name);

            impl $name {
                #[doc = concat!(" The minimum valid value for [`", stringify!($name), "`]")]
                pub const MIN: Self = Self($min);

                #[doc = concat!(" The zero value for [`", stringify!($name), "`]")]
                pub const ZERO: Self = Self(0.0);

                #[doc = concat!(" The maximum valid value for [`", stringify!($name), "`]")]
                pub const MAX: Self = Self($max);

                #[doc = concat!(" The minimum valid value for [`", stringify!($name), "`], as an [`f64`]")]
                pub const MIN_F64: f64 = $min;

                #[doc = concat!(" The maximum valid value for [`", stringify!($name), "`] as an [`f64`]")]
                pub const MAX_F64: f64 = $max;

                #[doc = concat!(
                    " Creates a new [`",
                    stringify!($name),
                    "`], validating that the floating point value is not NaN, ",
                    "+/- Infinity, or outside of the range [[`MIN`], [`MAX`]]. ",
                    "Both bounds are inclusive.",
                    "\n\n[`MIN`]: Self::MIN\n[`MAX`]: Self::MAX",
                )]
                #[inline]
                pub const fn new_checked(value: f64) -> Result<Self, ValidationError> {
                    let reason = match value.classify() {
                        FpCategory::Nan => InvalidValue::IsNaN,
                        FpCategory::Infinite => InvalidValue::IsInf,
                        _ if Self::MAX_F64 < value => InvalidValue::AboveMaximum {
                            max: Self::MAX_F64,
                            value,
                        },
                        _ if Self::MIN_F64 > value => InvalidValue::BelowMinimum {
                            min: Self::MIN_F64,
                            value,
                        },
                        // adding 0.0 folds -0.0 into 0.0, keeping Eq and Hash consistent
                        _ => return Ok(Self(value + 0.0)),
                    };

                    Err(ValidationError::out_of_range(CoordinateType::$name, reason))
                }

                /// Identical to [`new_checked`], but panics on [`Err`]. Intended for constants.
                ///
                /// [`new_checked`]: Self::new_checked
                #[inline]
                pub const fn new(value: f64) -> Self {
                    match value.classify() {
                        FpCategory::Nan => panic!("value cannot be 'NaN'"),
                        FpCategory::Infinite => panic!("value cannot be +/- Inf"),
                        _ if Self::MAX_F64 < value => {
                            panic!("value is higher than the maximum valid value")
                        },
                        _ if Self::MIN_F64 > value => {
                            panic!("value is below the minimum valid value")
                        },
                        _ => Self(value + 0.0),
                    }
                }

                #[inline]
                pub const fn into_degrees(self) -> Degrees {
                    Degrees::new(self.0)
                }

                /// Returns the value converted to radians, as `degrees * PI / 180`.
                #[inline]
                pub const fn to_radians(self) -> f64 {
                    self.0 * std::f64::consts::PI / 180.0
                }

                #[doc = concat!("Returns the underlying ", stringify!($name), " as a [`f64`]")]
                #[inline]
                pub const fn get(self) -> f64 {
                    self.0
                }
            }

            impl Sub for $name {
                type Output = Degrees;

                #[inline]
                fn sub(self, rhs: Self) -> Self::Output {
                    Degrees::new(self.0 - rhs.0)
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.debug_tuple(stringify!($name))
                        .field(&self.0)
                        .finish()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ValidationError;

                #[inline]
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.trim()
                        .parse::<f64>()
                        .map_err(|err| {
                            let reason = InvalidValue::ParseErr(err);
                            ValidationError::out_of_range(CoordinateType::$name, reason)
                        })
                        .and_then($name::new_checked)
                }
            }

            impl TryFrom<f64> for $name {
                type Error = ValidationError;

                #[inline]
                fn try_from(value: f64) -> Result<Self, Self::Error> {
                    Self::new_checked(value)
                }
            }

            impl From<$name> for f64 {
                #[inline]
                fn from(c: $name) -> f64 {
                    c.0
                }
            }

            impl Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ser::Serializer
                {
                    serializer.serialize_f64(self.0)
                }
            }

            // NaN is rejected at construction, so the float comparisons are total.
            impl PartialEq for $name {
                fn eq(&self, rhs: &Self) -> bool {
                    self.0 == rhs.0
                }
            }

            impl Eq for $name {}

            impl Hash for $name {
                #[inline]
                fn hash<H>(&self, hasher: &mut H)
                where
                    H: Hasher
                {
                    self.0.to_bits().hash(hasher)
                }
            }

            impl PartialEq<f64> for $name {
                fn eq(&self, rhs: &f64) -> bool {
                    self.0 == *rhs
                }
            }

            impl PartialOrd for $name {
                fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                    Some(self.cmp(rhs))
                }
            }

            impl PartialOrd<f64> for $name {
                fn partial_cmp(&self, rhs: &f64) -> Option<Ordering> {
                    self.0.partial_cmp(rhs)
                }
            }

            impl Ord for $name {
                fn cmp(&self, rhs: &Self) -> Ordering {
                    self.0.total_cmp(&rhs.0)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: de::Deserializer<'de>
                {
                    struct Visitor;

                    impl<'de> de::Visitor<'de> for Visitor {
                        type Value = $name;

                        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                            write!(f, "a valid {}, in degrees", CoordinateType::$name.as_str())
                        }

                        fn visit_i64<E>(self, int: i64) -> Result<Self::Value, E>
                        where
                            E: de::Error,
                        {
                            self.visit_f64(int as f64)
                        }

                        fn visit_u64<E>(self, int: u64) -> Result<Self::Value, E>
                        where
                            E: de::Error,
                        {
                            self.visit_f64(int as f64)
                        }

                        fn visit_f64<E>(self, float: f64) -> Result<Self::Value, E>
                        where
                            E: de::Error
                        {
                            $name::new_checked(float).map_err(|err| {
                                de::Error::invalid_value(de::Unexpected::Float(float), &err)
                            })
                        }

                        fn visit_str<E>(self, string: &str) -> Result<Self::Value, E>
                        where
                            E: de::Error
                        {
                            string.parse::<Self::Value>().map_err(|err| {
                                de::Error::invalid_value(de::Unexpected::Str(string), &err)
                            })
                        }
                    }

                    deserializer.deserialize_any(Visitor)
                }
            }

            /// rand impl to generate random coordinates for testing.
            #[cfg(any(test, feature = "random-geom"))]
            impl rand::distr::Distribution<$name> for rand::distr::StandardUniform {
                fn sample<R>(&self, rng: &mut R) -> $name
                where
                    R: rand::Rng + ?Sized
                {
                    $name(rng.random_range($min..=$max) + 0.0)
                }
            }

            #[cfg(any(test, feature = "random-geom"))]
            impl $name {
                #[doc = concat!(
                    " Identical to calling [`rand::Rng::random::<",
                    stringify!($name),
                    ">`] on an existing source of [`rand::Rng`]."
                )]
                pub fn random_from<R>(rng: &mut R) -> Self
                where
                    R: rand::Rng + ?Sized
                {
                    rng.random()
                }
            }
        )*
    };
}

impl_lat_lon! {
    (Latitude: -90.0 => 90.0),
    (Longitude: -180.0 => 180.0),
}

/// The two axes of a coordinate. Used to pick the error variant returned from
/// [`Latitude::new_checked`] and [`Longitude::new_checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateType {
    Latitude,
    Longitude,
}

impl CoordinateType {
    /// Returns the name of the variant as an lowercase `&'static str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for CoordinateType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Latitude, Longitude};
    use crate::error::{InvalidValue, ValidationError};

    #[test]
    fn lng_lat_test_bounds_inclusive() {
        assert_eq!(Latitude::new_checked(90.0), Ok(Latitude::MAX));
        assert_eq!(Latitude::new_checked(-90.0), Ok(Latitude::MIN));
        assert_eq!(Longitude::new_checked(180.0), Ok(Longitude::MAX));
        assert_eq!(Longitude::new_checked(-180.0), Ok(Longitude::MIN));

        assert_eq!(
            Latitude::new_checked(90.0000001),
            Err(ValidationError::OutOfRangeLatitude(InvalidValue::AboveMaximum {
                max: 90.0,
                value: 90.0000001,
            }))
        );
        assert_eq!(
            Longitude::new_checked(-180.0000001),
            Err(ValidationError::OutOfRangeLongitude(InvalidValue::BelowMinimum {
                min: -180.0,
                value: -180.0000001,
            }))
        );
    }

    #[test]
    fn lng_lat_test_non_finite() {
        assert_eq!(
            Latitude::new_checked(f64::NAN),
            Err(ValidationError::OutOfRangeLatitude(InvalidValue::IsNaN))
        );
        assert_eq!(
            Longitude::new_checked(f64::INFINITY),
            Err(ValidationError::OutOfRangeLongitude(InvalidValue::IsInf))
        );
        assert_eq!(
            Longitude::new_checked(f64::NEG_INFINITY),
            Err(ValidationError::OutOfRangeLongitude(InvalidValue::IsInf))
        );
    }

    #[test]
    fn lng_lat_test_negative_zero() {
        let neg = Latitude::new(-0.0);
        assert!(neg.get().is_sign_positive());
        assert_eq!(neg, Latitude::ZERO);
    }

    #[test]
    fn lng_lat_test_parse() {
        assert_eq!(" 51.5074 ".parse::<Latitude>(), Ok(Latitude::new(51.5074)));
        assert_eq!("-0.1278".parse::<Longitude>(), Ok(Longitude::new(-0.1278)));

        let err = "north".parse::<Latitude>().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRangeLatitude(InvalidValue::ParseErr(_))
        ));

        let err = "181".parse::<Longitude>().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRangeLongitude(InvalidValue::AboveMaximum { .. })
        ));
    }

    #[test]
    fn lng_lat_test_delta_and_radians() {
        let delta = Latitude::new(45.0) - Latitude::new(-45.0);
        assert_eq!(delta.get(), 90.0);

        let delta = Longitude::MIN - Longitude::MAX;
        assert_eq!(delta.get(), -360.0);

        assert!((Latitude::MAX.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((Longitude::MIN.to_radians() + std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn lng_lat_test_ordering() {
        assert!(Latitude::MIN < Latitude::ZERO);
        assert!(Longitude::new(10.0) > 9.5_f64);
        assert!(Latitude::new(12.5) == 12.5_f64);
    }

    #[test]
    fn lng_lat_test_serde() {
        let lat: Latitude = serde_json::from_str("45").unwrap();
        assert_eq!(lat.get(), 45.0);

        let lon: Longitude = serde_json::from_str("\"-122.25\"").unwrap();
        assert_eq!(lon.get(), -122.25);

        assert!(serde_json::from_str::<Latitude>("95.0").is_err());
        assert!(serde_json::from_str::<Longitude>("\"west\"").is_err());

        assert_eq!(serde_json::to_string(&Latitude::new(-12.5)).unwrap(), "-12.5");
    }

    #[test]
    fn lng_lat_test_random_in_range() {
        use rand::SeedableRng;

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let lat = Latitude::random_from(&mut rng);
            let lon = Longitude::random_from(&mut rng);

            assert_eq!(Latitude::new_checked(lat.get()), Ok(lat));
            assert_eq!(Longitude::new_checked(lon.get()), Ok(lon));
        }
    }
}
