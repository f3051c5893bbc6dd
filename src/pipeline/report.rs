use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::scale::ScaleDef;
use crate::pipeline::recommend::Recommendation;
use crate::pipeline::score::ScoreOutput;
use crate::questions::Questionnaire;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    ContributionData, ContributionRow, ReportContext, ResultData, ScaleMeta, SummaryData,
    ToolMeta, format_score_out_of,
};

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub outcome: &'a ScoreOutput,
    pub recommendation: &'a Recommendation,
    pub scale: &'a ScaleDef,
    pub questions: &'a Questionnaire,
    pub answers_source: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn render_text(input: &ReportInput<'_>) -> String {
    render_report_text(&build_context(input))
}

pub fn render_json(input: &ReportInput<'_>) -> serde_json::Result<String> {
    render_summary_json(&build_summary(input))
}

/// Writes assessment.txt and summary.json into out_dir.
pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let assessment_path = out_dir.join("assessment.txt");
    write_text(&assessment_path, &render_text(input))?;

    let summary_path = out_dir.join("summary.json");
    let json = render_json(input)?;
    write_text(&summary_path, &json)?;

    tracing::info!("wrote reports: dir={}", out_dir.display());
    Ok(())
}

fn build_context(input: &ReportInput<'_>) -> ReportContext {
    ReportContext {
        score_display: format_score_out_of(input.outcome.score, input.scale.display_max),
        band_name: input.recommendation.band.to_string(),
        recommendation: input.recommendation.text,
        total: input.outcome.total,
        max_total: input.scale.max_total(input.questions.len()),
        scale_mode: input.scale.mode.name().to_string(),
        answers_source: input.answers_source.clone(),
        contributions: input
            .outcome
            .contributions
            .iter()
            .enumerate()
            .map(|(idx, c)| ContributionRow {
                position: idx + 1,
                id: c.id,
                raw: c.raw,
                contribution: c.contribution,
                reversed: c.reversed,
            })
            .collect(),
    }
}

fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        scale: ScaleMeta {
            mode: input.scale.mode.name().to_string(),
            question_count: input.questions.len(),
            response_min: input.scale.response_min,
            response_max: input.scale.response_max,
            answers_source: input.answers_source.clone(),
        },
        result: ResultData {
            score: input.outcome.score.value(),
            display: format_score_out_of(input.outcome.score, input.scale.display_max),
            total: input.outcome.total,
            max_total: input.scale.max_total(input.questions.len()),
            band: input.recommendation.band.label().to_string(),
        },
        recommendation: input.recommendation.text.to_string(),
        contributions: input
            .outcome
            .contributions
            .iter()
            .enumerate()
            .map(|(idx, c)| ContributionData {
                position: idx + 1,
                id: c.id.to_string(),
                raw: c.raw,
                contribution: c.contribution,
                reversed: c.reversed,
            })
            .collect(),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/report.rs"]
mod tests;
