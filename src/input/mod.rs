pub mod answers;
pub mod prompt;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::scale::ScaleDef;
use crate::questions::Questionnaire;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("answer {value} for question {position} is outside the {min}-{max} scale")]
    OutOfRange {
        position: usize,
        value: i64,
        min: u8,
        max: u8,
    },
    #[error("could not read answer {position}: {token:?} is not a whole number")]
    Parse { position: usize, token: String },
}

/// One validated answer per question, in questionnaire order.
#[derive(Debug, Clone)]
pub struct ResponseSet {
    values: Vec<u8>,
}

impl ResponseSet {
    /// Checks length first, then each value against the scale. Positions in
    /// errors are 1-based, matching the printed questionnaire.
    pub fn new(
        values: Vec<i64>,
        questions: &Questionnaire,
        scale: &ScaleDef,
    ) -> Result<Self, InputError> {
        if values.len() != questions.len() {
            return Err(InputError::WrongLength {
                expected: questions.len(),
                actual: values.len(),
            });
        }
        let mut checked = Vec::with_capacity(values.len());
        for (idx, value) in values.iter().enumerate() {
            if *value < scale.response_min as i64 || *value > scale.response_max as i64 {
                return Err(InputError::OutOfRange {
                    position: idx + 1,
                    value: *value,
                    min: scale.response_min,
                    max: scale.response_max,
                });
            }
            checked.push(*value as u8);
        }
        Ok(Self { values: checked })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Where the answers came from, recorded in the reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswersSource {
    Interactive,
    Inline,
    File(PathBuf),
}

impl fmt::Display for AnswersSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswersSource::Interactive => f.write_str("interactive"),
            AnswersSource::Inline => f.write_str("inline"),
            AnswersSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
