mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use logsift_core::{resolve_input_path, Config, LogSift, OutputFormat, SiftError};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level())),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Starting LogSift CLI");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.format == OutputFormat::Text {
        writeln!(out, "=== Log Sift v{} ===", env!("CARGO_PKG_VERSION"))?;
    }

    let raw_path = match cli.file.clone() {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            // JSON mode keeps stdout for the report only
            if cli.format == OutputFormat::Json {
                prompt_for_path(&mut stdin.lock(), &mut io::stderr())?
            } else {
                prompt_for_path(&mut stdin.lock(), &mut out)?
            }
        }
    };
    let input = resolve_input_path(&raw_path)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(dir) = cli.output_dir {
        config.output.directory = Some(dir);
    }
    if cli.quiet {
        config.output.print_entries = false;
    }
    debug!("Effective configuration: {:?}", config);

    let report = LogSift::new(config).run(&input, cli.format, &mut out)?;
    out.flush()?;
    info!(
        "Classified {} lines into {}",
        report.summary.total,
        report.output_directory.display()
    );
    Ok(())
}

/// Asks for the log file path on `input`. End of input counts as an empty answer.
fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String, SiftError> {
    write!(prompt, "🔍 Enter full path of the log file to analyze: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(SiftError::Prompt)?;
    let path = line.trim();
    if path.is_empty() {
        return Err(SiftError::EmptyInputPath);
    }
    Ok(path.to_string())
}
