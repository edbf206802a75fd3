pub mod console;
pub mod files;
pub mod json;

use crate::model::{Bucket, LogEntry};
use crate::timestamp::split_timestamp;
use std::path::{Path, PathBuf};

pub use console::{write_generated_files, write_sections, write_summary};
pub use files::write_report_files;
pub use json::{render_json_report, JsonReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {} (expected text or json)", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Where the report files of one input end up: `<root>/<stem>_logs/<stem>_<bucket>.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub directory: PathBuf,
    pub base_name: String,
}

impl OutputLayout {
    pub fn for_input(root: &Path, input: &Path) -> Self {
        let base_name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "log".to_string());
        Self {
            directory: root.join(format!("{}_logs", base_name)),
            base_name,
        }
    }

    pub fn bucket_file(&self, bucket: Bucket) -> PathBuf {
        self.directory
            .join(format!("{}_{}.log", self.base_name, bucket.file_suffix()))
    }

    pub fn summary_file(&self) -> PathBuf {
        self.directory.join(format!("{}_summary.txt", self.base_name))
    }

    /// Bucket files in report order, then the summary file.
    pub fn all_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Bucket::ALL.iter().map(|b| self.bucket_file(*b)).collect();
        files.push(self.summary_file());
        files
    }
}

/// Renders one entry the way both the console and the bucket files show it.
pub fn format_entry(index: usize, entry: &LogEntry) -> String {
    let (date, time) = split_timestamp(&entry.timestamp);
    format!(
        "{}. Line:{} -> {} | Date:{}, Time:{} => {}",
        index, entry.line_number, entry.category_token, date, time, entry.message
    )
}

/// Labelled count lines shared by the console summary and the summary file.
pub(crate) fn summary_lines(source: &Path, summary: &crate::analyzer::RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Analyzed Log File: {}", source.display()),
        format!("{:<15} : {}", "Total Log Lines", summary.total),
    ];
    for bucket in Bucket::ALL {
        let label = format!("{} Log Lines", title_case(bucket));
        lines.push(format!("{:<15} : {}", label, summary.count(bucket)));
    }
    lines
}

fn title_case(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Debug => "Debug",
        Bucket::Info => "Info",
        Bucket::Error => "Error",
        Bucket::Other => "Other",
    }
}
