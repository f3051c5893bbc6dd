use std::path::Path;

use crate::input::{InputError, ResponseSet};
use crate::model::scale::ScaleDef;
use crate::questions::Questionnaire;

/// Parses a list of answers separated by commas and/or whitespace,
/// e.g. "3,4,2,5,1,3,4,4,2,3" or one answer per line.
pub fn parse_answer_list(
    text: &str,
    questions: &Questionnaire,
    scale: &ScaleDef,
) -> Result<ResponseSet, InputError> {
    let mut values = Vec::new();
    for (idx, token) in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
    {
        let value = token.parse::<i64>().map_err(|_| InputError::Parse {
            position: idx + 1,
            token: token.to_string(),
        })?;
        values.push(value);
    }
    ResponseSet::new(values, questions, scale)
}

/// Reads a whole answers file and parses it like an inline list.
pub fn load_answers_file(
    path: &Path,
    questions: &Questionnaire,
    scale: &ScaleDef,
) -> Result<ResponseSet, InputError> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!("read answers file: path={}, bytes={}", path.display(), text.len());
    parse_answer_list(&text, questions, scale)
}
