use std::io::{BufRead, Write};

use crate::input::{InputError, ResponseSet};
use crate::model::scale::ScaleDef;
use crate::questions::Questionnaire;

/// Walks the questionnaire one question at a time, re-asking until the
/// answer is usable. An empty line takes the neutral default.
pub fn collect_responses<R: BufRead, W: Write>(
    questions: &Questionnaire,
    scale: &ScaleDef,
    input: &mut R,
    out: &mut W,
) -> Result<ResponseSet, InputError> {
    let mut values = Vec::with_capacity(questions.len());
    for (idx, question) in questions.questions.iter().enumerate() {
        writeln!(out, "Q{}. {}", idx + 1, question.prompt)?;
        let value = loop {
            write!(
                out,
                "  answer [{}-{}, Enter = {}]: ",
                scale.response_min, scale.response_max, scale.neutral
            )?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(InputError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("input ended at question {} of {}", idx + 1, questions.len()),
                )));
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break scale.neutral as i64;
            }
            match trimmed.parse::<i64>() {
                Ok(v) if v >= scale.response_min as i64 && v <= scale.response_max as i64 => {
                    break v;
                }
                Ok(v) => {
                    writeln!(
                        out,
                        "  {} is outside the {}-{} scale, try again",
                        v, scale.response_min, scale.response_max
                    )?;
                }
                Err(_) => {
                    writeln!(out, "  {trimmed:?} is not a whole number, try again")?;
                }
            }
        };
        values.push(value);
    }
    ResponseSet::new(values, questions, scale)
}
