/// A number of degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degrees(f64);

impl Degrees {
    #[inline]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Builds an angle from a value in radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians * 180.0 / std::f64::consts::PI)
    }

    #[inline]
    pub const fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // unicode character is the degrees symbol
        write!(f, "{}\u{00B0}", self.0)
    }
}
