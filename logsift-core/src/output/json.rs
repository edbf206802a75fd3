use super::OutputLayout;
use crate::analyzer::{BucketedLogs, LogAnalysis, RunSummary};
use crate::error::SiftError;
use serde::Serialize;
use std::path::PathBuf;

/// Machine-readable run report, printed instead of the console text in JSON mode.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub input: String,
    pub summary: RunSummary,
    pub output_directory: String,
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<&'a BucketedLogs>,
}

pub fn render_json_report(
    analysis: &LogAnalysis,
    layout: &OutputLayout,
    files: &[PathBuf],
    include_entries: bool,
) -> Result<String, SiftError> {
    let report = JsonReport {
        input: analysis.source.display().to_string(),
        summary: analysis.summary(),
        output_directory: layout.directory.display().to_string(),
        files: files.iter().map(|f| f.display().to_string()).collect(),
        buckets: include_entries.then_some(&analysis.buckets),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
