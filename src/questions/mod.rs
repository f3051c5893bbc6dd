pub mod defs;

pub use defs::{Polarity, QuestionDef, builtin_questions};

/// The fixed ordered question list for one assessment. Reverse scoring is
/// derived from each question's polarity, never from a separate index list.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub questions: &'static [QuestionDef],
}

impl Questionnaire {
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 0-based positions whose raw answer is inverted before aggregation.
    pub fn reverse_positions(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.polarity == Polarity::Reverse)
            .map(|(i, _)| i)
            .collect()
    }
}
