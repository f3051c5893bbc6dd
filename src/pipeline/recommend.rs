use crate::model::bands::HumilityBand;
use crate::model::score::HumilityScore;

const LOW_TEXT: &str = "You appear to be less open to others' viewpoints or new information. \
Try practicing active listening, asking clarifying questions, and seeking out mentors who \
challenge your thinking. Small daily steps, such as reading diverse opinions, can help.";

const MODERATE_TEXT: &str = "You show some openness but might benefit from further reflection. \
Consider journaling about situations where you might have been overly attached to your beliefs. \
Seek critical feedback and learn to embrace 'I don't know' moments.";

const HIGH_TEXT: &str = "You're fairly intellectually humble. Keep fostering an environment \
where people feel comfortable challenging your ideas. Engage in debate clubs or workshops that \
encourage thoughtful disagreement.";

const VERY_HIGH_TEXT: &str = "You demonstrate high intellectual humility. To maintain this \
level of openness, continue challenging yourself with new perspectives, welcoming feedback, \
and coaching others on how to become more open-minded.";

#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub band: HumilityBand,
    pub text: &'static str,
}

pub fn run_recommend(score: HumilityScore) -> Recommendation {
    let band = classify_band(score.value());
    Recommendation {
        band,
        text: band_text(band),
    }
}

/// Band boundaries are inclusive on the upper edge and compare the
/// already-rounded score, so 6.0 is Moderate and 6.1 is High.
pub fn classify_band(value: f64) -> HumilityBand {
    if value <= 3.0 {
        return HumilityBand::Low;
    }
    if value <= 6.0 {
        return HumilityBand::Moderate;
    }
    if value <= 8.0 {
        return HumilityBand::High;
    }
    HumilityBand::VeryHigh
}

pub fn band_text(band: HumilityBand) -> &'static str {
    match band {
        HumilityBand::Low => LOW_TEXT,
        HumilityBand::Moderate => MODERATE_TEXT,
        HumilityBand::High => HIGH_TEXT,
        HumilityBand::VeryHigh => VERY_HIGH_TEXT,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/recommend.rs"]
mod tests;
