use super::{format_entry, summary_lines, OutputLayout};
use crate::analyzer::LogAnalysis;
use crate::error::SiftError;
use crate::model::Bucket;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes the four bucket files and the summary file, creating the output
/// directory when needed. Existing files are truncated.
pub fn write_report_files(
    layout: &OutputLayout,
    analysis: &LogAnalysis,
) -> Result<Vec<PathBuf>, SiftError> {
    fs::create_dir_all(&layout.directory).map_err(|e| SiftError::CreateOutputDir {
        path: layout.directory.clone(),
        source: e,
    })?;
    debug!("Output directory ready: {}", layout.directory.display());

    let mut written = Vec::with_capacity(Bucket::ALL.len() + 1);
    for bucket in Bucket::ALL {
        let path = layout.bucket_file(bucket);
        let entries = analysis.buckets.entries(bucket);
        write_file(&path, |w| {
            for (i, entry) in entries.iter().enumerate() {
                writeln!(w, "{}", format_entry(i + 1, entry))?;
            }
            Ok(())
        })?;
        debug!("Wrote {} entries to {}", entries.len(), path.display());
        written.push(path);
    }

    let path = layout.summary_file();
    write_file(&path, |w| {
        writeln!(w, "📊 Summary of Logs")?;
        writeln!(w, "{}", "-".repeat(50))?;
        for line in summary_lines(&analysis.source, &analysis.summary()) {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    })?;
    written.push(path);

    info!(
        "Wrote {} report files to {}",
        written.len(),
        layout.directory.display()
    );
    Ok(written)
}

// The writer is dropped (and the file closed) on every return path.
fn write_file<F>(path: &Path, render: F) -> Result<(), SiftError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |e: io::Error| SiftError::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    render(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)
}
