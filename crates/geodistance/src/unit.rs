//! [`DistanceUnit`], and the fixed conversion factors from kilometers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, de, ser};

use crate::error::ValidationError;

/// A unit of distance that a great-circle distance can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceUnit {
    /// Kilometers, token `km`.
    Kilometers,
    /// Meters, token `m`.
    Meters,
    /// Statute miles, token `mi`.
    Miles,
    /// Nautical miles, token `nm`.
    NauticalMiles,
    /// Yards, token `yd`.
    Yards,
    /// Feet, token `ft`.
    Feet,
}

#[cfg(feature = "deepsize")]
deepsize::known_deep_size!(0; DistanceUnit);

/// Token and multiplicative factor from kilometers, indexed by the [`DistanceUnit`]
/// discriminant.
static UNIT_TABLE: [(&str, f64); 6] = [
    ("km", 1.0),
    ("m", 1000.0),
    ("mi", 0.621371),
    ("nm", 0.539957),
    ("yd", 1093.6133),
    ("ft", 3280.8399),
];

impl DistanceUnit {
    /// Every unit, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Kilometers,
        Self::Meters,
        Self::Miles,
        Self::NauticalMiles,
        Self::Yards,
        Self::Feet,
    ];

    /// Returns the short token for this unit (`"km"`, `"m"`, `"mi"`, `"nm"`, `"yd"` or `"ft"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        UNIT_TABLE[*self as usize].0
    }

    /// The factor a distance in kilometers is multiplied by to express it in this unit.
    #[inline]
    pub fn conversion_factor(&self) -> f64 {
        UNIT_TABLE[*self as usize].1
    }

    /// Converts a distance in kilometers into this unit.
    #[inline]
    pub fn convert_from_km(&self, km: f64) -> f64 {
        km * self.conversion_factor()
    }

    /// Converts `value`, expressed in `self`, into the unit `to` (by way of kilometers).
    #[inline]
    pub fn convert(&self, value: f64, to: Self) -> f64 {
        if *self == to {
            return value;
        }

        to.convert_from_km(value / self.conversion_factor())
    }

    /// Looks up a unit by its exact token. Returns [`None`] for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == token)
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        match Self::from_token(token) {
            Some(unit) => Ok(unit),
            None => {
                tracing::debug!(message = "rejected unknown distance unit", token);
                Err(ValidationError::InvalidUnit(token.to_owned()))
            }
        }
    }
}

impl TryFrom<&str> for DistanceUnit {
    type Error = ValidationError;

    #[inline]
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl TryFrom<&String> for DistanceUnit {
    type Error = ValidationError;

    #[inline]
    fn try_from(token: &String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl Serialize for DistanceUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DistanceUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = DistanceUnit;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("one of 'km', 'm', 'mi', 'nm', 'yd' or 'ft'")
            }

            fn visit_str<E>(self, string: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                string
                    .parse()
                    .map_err(|err| de::Error::invalid_value(de::Unexpected::Str(string), &err))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(any(test, feature = "random-geom"))]
impl rand::distr::Distribution<DistanceUnit> for rand::distr::StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> DistanceUnit
    where
        R: rand::Rng + ?Sized,
    {
        DistanceUnit::ALL[rng.random_range(0..DistanceUnit::ALL.len())]
    }
}
