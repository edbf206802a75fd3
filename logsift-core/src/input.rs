use crate::error::SiftError;
use encoding_rs::UTF_8;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Iterator over the non-blank lines of a log, paired with their 1-based line number.
///
/// Lines are decoded as UTF-8 (a leading BOM is dropped and invalid bytes are
/// replaced) and stripped of surrounding whitespace. Blank lines are skipped
/// but still advance the line number.
pub struct LogLines<R> {
    reader: R,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    fn decode(&self) -> String {
        let (text, had_errors) = if self.line_number == 1 {
            UTF_8.decode_with_bom_removal(&self.buffer)
        } else {
            UTF_8.decode_without_bom_handling(&self.buffer)
        };
        if had_errors {
            warn!("Line {} contains invalid UTF-8, replaced lossily", self.line_number);
        }
        text.trim().to_string()
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.decode();
                    if !line.is_empty() {
                        return Some(Ok((self.line_number, line)));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Opens a log file for classification. Nothing is read until iteration.
pub fn open_log_file(path: &Path) -> Result<LogLines<BufReader<File>>, SiftError> {
    info!("Opening log file: {}", path.display());
    let file = File::open(path).map_err(|e| SiftError::from_open(path, e))?;
    debug!("Opened {}", path.display());
    Ok(LogLines::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(data: &[u8]) -> Vec<(usize, String)> {
        LogLines::new(Cursor::new(data.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_blank_lines_skipped_but_numbered() {
        let lines = collect(b"first line\n\n   \nfourth line\n");
        assert_eq!(
            lines,
            vec![(1, "first line".to_string()), (4, "fourth line".to_string())]
        );
    }

    #[test]
    fn test_strips_whitespace_and_crlf() {
        let lines = collect(b"  padded entry  \r\nlast without newline");
        assert_eq!(lines[0], (1, "padded entry".to_string()));
        assert_eq!(lines[1], (2, "last without newline".to_string()));
    }

    #[test]
    fn test_bom_removed_from_first_line() {
        let lines = collect(b"\xEF\xBB\xBFts INFO hello\n");
        assert_eq!(lines[0].1, "ts INFO hello");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let lines = collect(b"ts INFO caf\xE9\n");
        assert_eq!(lines[0].1, "ts INFO caf\u{FFFD}");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_log_file(&dir.path().join("nope.log"));
        assert!(matches!(result, Err(SiftError::FileNotFound { .. })));
    }
}
