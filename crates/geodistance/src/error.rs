//! Validation errors returned when building points or resolving distance units.

use std::convert::Infallible;
use std::fmt;

use serde::{Serialize, de};

use crate::lng_lat::CoordinateType;

/// Every way an input can be rejected. None of these are transient, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationError {
    /// The latitude was not a finite value within [-90, 90].
    #[error("latitude invalid: cannot be {0}")]
    OutOfRangeLatitude(InvalidValue),
    /// The longitude was not a finite value within [-180, 180].
    #[error("longitude invalid: cannot be {0}")]
    OutOfRangeLongitude(InvalidValue),
    /// The unit token didn't match any [`DistanceUnit`].
    ///
    /// [`DistanceUnit`]: crate::DistanceUnit
    #[error("invalid distance unit '{0}', expected one of 'km', 'm', 'mi', 'nm', 'yd' or 'ft'")]
    InvalidUnit(String),
}

impl ValidationError {
    /// Builds the out of range error for the given axis.
    pub(crate) const fn out_of_range(coordinate: CoordinateType, reason: InvalidValue) -> Self {
        match coordinate {
            CoordinateType::Latitude => Self::OutOfRangeLatitude(reason),
            CoordinateType::Longitude => Self::OutOfRangeLongitude(reason),
        }
    }

    /// Returns the axis that failed validation, if this is a coordinate error.
    pub const fn coordinate(&self) -> Option<CoordinateType> {
        match self {
            Self::OutOfRangeLatitude(_) => Some(CoordinateType::Latitude),
            Self::OutOfRangeLongitude(_) => Some(CoordinateType::Longitude),
            Self::InvalidUnit(_) => None,
        }
    }

    /// Returns the reason a coordinate was rejected, if this is a coordinate error.
    pub const fn reason(&self) -> Option<&InvalidValue> {
        match self {
            Self::OutOfRangeLatitude(reason) | Self::OutOfRangeLongitude(reason) => Some(reason),
            Self::InvalidUnit(_) => None,
        }
    }
}

impl From<Infallible> for ValidationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl de::Expected for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{self}")
    }
}

/// Why a coordinate value was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidValue {
    #[serde(rename = "is_nan")]
    IsNaN,
    IsInf,
    #[serde(serialize_with = "serialize_display")]
    ParseErr(std::num::ParseFloatError),
    BelowMinimum { min: f64, value: f64 },
    AboveMaximum { max: f64, value: f64 },
}

fn serialize_display<T, S>(disp: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(disp)
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::IsNaN => write!(formatter, "'NaN'"),
            Self::IsInf => write!(formatter, "infinite"),
            Self::ParseErr(err) => write!(formatter, "unparsable ({err})"),
            Self::BelowMinimum { min, value } => {
                write!(formatter, "below the minimum valid value {min} (received {value})")
            }
            Self::AboveMaximum { max, value } => {
                write!(formatter, "above the maximum valid value {max} (received {value})")
            }
        }
    }
}
