use super::{format_entry, summary_lines, OutputLayout};
use crate::analyzer::LogAnalysis;
use crate::model::Bucket;
use std::io::{self, Write};
use std::path::PathBuf;

const RULE_WIDTH: usize = 100;

/// Prints one section per bucket. With `print_entries` off only the headers are shown.
pub fn write_sections<W: Write>(
    out: &mut W,
    analysis: &LogAnalysis,
    print_entries: bool,
) -> io::Result<()> {
    for bucket in Bucket::ALL {
        let entries = analysis.buckets.entries(bucket);
        writeln!(out)?;
        writeln!(out, "🔸 Printing {} Logs ({})", bucket, entries.len())?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        if print_entries {
            for (i, entry) in entries.iter().enumerate() {
                writeln!(out, "{}", format_entry(i + 1, entry))?;
            }
        }
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, analysis: &LogAnalysis) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Summary of Logs")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for line in summary_lines(&analysis.source, &analysis.summary()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_generated_files<W: Write>(
    out: &mut W,
    layout: &OutputLayout,
    files: &[PathBuf],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "✅ Output files generated inside '{}':",
        layout.directory.display()
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for file in files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        writeln!(out, "-> {}", name)?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}
