use std::fmt;

/// Final assessment score, already rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumilityScore(f64);

impl HumilityScore {
    /// Rounds half away from zero to one decimal place.
    pub fn from_raw(raw: f64) -> Self {
        Self((raw * 10.0).round() / 10.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for HumilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
