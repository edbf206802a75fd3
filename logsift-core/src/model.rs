use serde::{Deserialize, Serialize};

/// Severity bucket a classified line lands in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Debug,
    Info,
    Error,
    Other,
}

impl Bucket {
    /// Report order: sections, files and summary lines all follow it.
    pub const ALL: [Bucket; 4] = [Bucket::Debug, Bucket::Info, Bucket::Error, Bucket::Other];

    /// Lowercase name used in output file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Bucket::Debug => "debug",
            Bucket::Info => "info",
            Bucket::Error => "error",
            Bucket::Other => "other",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Debug => write!(f, "DEBUG"),
            Bucket::Info => write!(f, "INFO"),
            Bucket::Error => write!(f, "ERROR"),
            Bucket::Other => write!(f, "OTHER"),
        }
    }
}

/// One well-formed log line split into its three fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub line_number: usize,
    pub timestamp: String,
    pub category_token: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(
        line_number: usize,
        timestamp: impl Into<String>,
        category_token: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            timestamp: timestamp.into(),
            category_token: category_token.into(),
            message: message.into(),
        }
    }
}
