use crate::input::ResponseSet;
use crate::model::scale::{ScaleDef, ScaleMode};
use crate::model::score::HumilityScore;
use crate::questions::{Polarity, Questionnaire};

/// How one answer entered the total, kept for the report breakdown.
#[derive(Debug, Clone, Copy)]
pub struct QuestionContribution {
    pub id: &'static str,
    pub raw: u8,
    pub contribution: u8,
    pub reversed: bool,
}

#[derive(Debug, Clone)]
pub struct ScoreOutput {
    pub score: HumilityScore,
    pub total: u32,
    pub contributions: Vec<QuestionContribution>,
}

/// Sums per-question contributions, inverting reverse-keyed questions,
/// then maps the total onto the display scale.
pub fn run_scoring(
    responses: &ResponseSet,
    questions: &Questionnaire,
    scale: &ScaleDef,
) -> ScoreOutput {
    let mut total = 0u32;
    let mut contributions = Vec::with_capacity(questions.len());
    for (question, raw) in questions.questions.iter().zip(responses.values()) {
        let reversed = question.polarity == Polarity::Reverse;
        let contribution = if reversed { scale.invert(*raw) } else { *raw };
        total += contribution as u32;
        contributions.push(QuestionContribution {
            id: question.id,
            raw: *raw,
            contribution,
            reversed,
        });
    }

    let max_total = scale.max_total(questions.len());
    let raw_score = match scale.mode {
        ScaleMode::Direct => total as f64 / max_total as f64 * scale.display_max,
        ScaleMode::Rebased => {
            let min_total = scale.min_total(questions.len());
            (total - min_total) as f64 / (max_total - min_total) as f64
                * (scale.display_max - scale.display_min)
                + scale.display_min
        }
    };

    ScoreOutput {
        score: HumilityScore::from_raw(raw_score),
        total,
        contributions,
    }
}
