use clap::Parser;
use logsift_core::OutputFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logsift",
    about = "Sort a log file into DEBUG, INFO, ERROR and OTHER reports",
    version
)]
pub struct Cli {
    /// Log file to analyze (prompted for when omitted)
    pub file: Option<String>,

    /// Directory in which the <name>_logs folder is created
    #[arg(short, long, env = "LOGSIFT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format on stdout (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only print section headers and the summary, not every entry
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, env = "LOGSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
