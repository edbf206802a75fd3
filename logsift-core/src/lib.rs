// LogSift Library - log line classification and reporting
//
// Reads a plain-text log, sorts every well-formed line into a DEBUG, INFO,
// ERROR or OTHER bucket and writes a per-bucket report next to a summary.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod analyzer;
pub mod classification;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod timestamp;

pub use analyzer::{analyze_file, BucketedLogs, LogAnalysis, RunSummary};
pub use classification::{classify_token, ClassificationRule, CLASSIFICATION_RULES};
pub use config::{Config, OutputConfig};
pub use error::SiftError;
pub use input::{open_log_file, LogLines};
pub use model::{Bucket, LogEntry};
pub use output::{format_entry, OutputFormat, OutputLayout};
pub use parser::parse_single_log_line;
pub use timestamp::{split_timestamp, NOT_APPLICABLE};

/// Validates a user supplied input path before any file access.
pub fn resolve_input_path(raw: &str) -> Result<PathBuf, SiftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SiftError::EmptyInputPath);
    }
    Ok(PathBuf::from(trimmed))
}

/// What one completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    pub output_directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Main LogSift struct running the read, classify and report pipeline.
pub struct LogSift {
    config: Config,
}

impl LogSift {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout_for(&self, input: &Path) -> OutputLayout {
        OutputLayout::for_input(&self.config.output_root(), input)
    }

    /// Runs the whole pipeline for one file, writing the report to `out`.
    ///
    /// The input is read completely before the output directory is touched,
    /// so a missing or unreadable file leaves the filesystem unchanged.
    pub fn run<W: Write>(
        &self,
        input: &Path,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<RunReport, SiftError> {
        info!("Analyzing {} ({} output)", input.display(), format);
        let analysis = match analyze_file(input) {
            Ok(analysis) => analysis,
            Err(e) => {
                debug!("Analysis of {} failed: {}", input.display(), e);
                return Err(e);
            }
        };

        let layout = self.layout_for(input);
        let print_entries = self.config.output.print_entries;

        if format == OutputFormat::Text {
            output::write_sections(out, &analysis, print_entries)?;
            output::write_summary(out, &analysis)?;
        }

        let files = output::write_report_files(&layout, &analysis)?;

        match format {
            OutputFormat::Text => output::write_generated_files(out, &layout, &files)?,
            OutputFormat::Json => {
                let json = output::render_json_report(&analysis, &layout, &files, print_entries)?;
                writeln!(out, "{}", json)?;
            }
        }

        Ok(RunReport {
            summary: analysis.summary(),
            output_directory: layout.directory,
            files,
        })
    }
}
