use crate::classification::classify_token;
use crate::error::SiftError;
use crate::input::{open_log_file, LogLines};
use crate::model::{Bucket, LogEntry};
use crate::parser::parse_single_log_line;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Line counts for one run. Malformed lines are not counted anywhere.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub debug: usize,
    pub info: usize,
    pub error: usize,
    pub other: usize,
}

impl RunSummary {
    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Debug => self.debug,
            Bucket::Info => self.info,
            Bucket::Error => self.error,
            Bucket::Other => self.other,
        }
    }
}

/// Classified entries, one ordered list per bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketedLogs {
    debug: Vec<LogEntry>,
    info: Vec<LogEntry>,
    error: Vec<LogEntry>,
    other: Vec<LogEntry>,
}

impl BucketedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, bucket: Bucket, entry: LogEntry) {
        match bucket {
            Bucket::Debug => self.debug.push(entry),
            Bucket::Info => self.info.push(entry),
            Bucket::Error => self.error.push(entry),
            Bucket::Other => self.other.push(entry),
        }
    }

    /// Entries of one bucket in input order.
    pub fn entries(&self, bucket: Bucket) -> &[LogEntry] {
        match bucket {
            Bucket::Debug => &self.debug,
            Bucket::Info => &self.info,
            Bucket::Error => &self.error,
            Bucket::Other => &self.other,
        }
    }

    pub fn summary(&self) -> RunSummary {
        let debug = self.debug.len();
        let info = self.info.len();
        let error = self.error.len();
        let other = self.other.len();
        RunSummary {
            total: debug + info + error + other,
            debug,
            info,
            error,
            other,
        }
    }
}

/// Result of the read pass over one input file.
#[derive(Debug, Clone)]
pub struct LogAnalysis {
    pub source: PathBuf,
    pub buckets: BucketedLogs,
}

impl LogAnalysis {
    pub fn summary(&self) -> RunSummary {
        self.buckets.summary()
    }
}

/// Classifies every line yielded by `lines` into buckets.
pub fn classify_lines<R: BufRead>(
    source: &Path,
    lines: LogLines<R>,
) -> Result<LogAnalysis, SiftError> {
    let mut buckets = BucketedLogs::new();
    let mut seen = 0usize;

    for line in lines {
        let (line_number, text) = line.map_err(|source_err| SiftError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        seen += 1;

        if let Some(entry) = parse_single_log_line(line_number, &text) {
            let bucket = classify_token(&entry.category_token);
            buckets.add_entry(bucket, entry);
        }
    }

    let analysis = LogAnalysis {
        source: source.to_path_buf(),
        buckets,
    };
    debug!(
        "Read {} non-blank lines, classified {}",
        seen,
        analysis.summary().total
    );
    Ok(analysis)
}

/// Opens and fully reads `path`. Fails before anything is written to disk.
pub fn analyze_file(path: &Path) -> Result<LogAnalysis, SiftError> {
    let lines = open_log_file(path)?;
    let analysis = classify_lines(path, lines)?;
    info!(
        "Classified {} log lines from {}",
        analysis.summary().total,
        path.display()
    );
    Ok(analysis)
}
