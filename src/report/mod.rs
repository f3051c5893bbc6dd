pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::score::HumilityScore;

/// Everything the text report needs, already formatted where possible.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub score_display: String,
    pub band_name: String,
    pub recommendation: &'static str,
    pub total: u32,
    pub max_total: u32,
    pub scale_mode: String,
    pub answers_source: String,
    pub contributions: Vec<ContributionRow>,
}

#[derive(Debug, Clone)]
pub struct ContributionRow {
    pub position: usize,
    pub id: &'static str,
    pub raw: u8,
    pub contribution: u8,
    pub reversed: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub scale: ScaleMeta,
    pub result: ResultData,
    pub recommendation: String,
    pub contributions: Vec<ContributionData>,
}

#[derive(Debug, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ScaleMeta {
    pub mode: String,
    pub question_count: usize,
    pub response_min: u8,
    pub response_max: u8,
    pub answers_source: String,
}

#[derive(Debug, Serialize)]
pub struct ResultData {
    pub score: f64,
    pub display: String,
    pub total: u32,
    pub max_total: u32,
    pub band: String,
}

#[derive(Debug, Serialize)]
pub struct ContributionData {
    pub position: usize,
    pub id: String,
    pub raw: u8,
    pub contribution: u8,
    pub reversed: bool,
}

/// "7.6/10" style display used by the report header and the summary.
pub fn format_score_out_of(score: HumilityScore, display_max: f64) -> String {
    format!("{score}/{display_max:.0}")
}
