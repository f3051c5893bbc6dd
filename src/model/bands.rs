use std::fmt;

/// Interpretation band for a rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumilityBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl HumilityBand {
    /// Stable machine-readable name used in the JSON summary.
    pub fn label(&self) -> &'static str {
        match self {
            HumilityBand::Low => "low",
            HumilityBand::Moderate => "moderate",
            HumilityBand::High => "high",
            HumilityBand::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for HumilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HumilityBand::Low => "Low",
            HumilityBand::Moderate => "Moderate",
            HumilityBand::High => "High",
            HumilityBand::VeryHigh => "Very High",
        };
        f.write_str(name)
    }
}
