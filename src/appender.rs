use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::record::FillRecord;

/// Reasons a record could not be appended.
///
/// None of these are retried. If one is returned, nothing was written for
/// the record that caused it.
#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    /// Fewer data values were supplied than a record needs.
    #[error("Expected {expected} data values, got {found}")]
    MissingValues { expected: usize, found: usize },
    /// The target file could not be opened for appending.
    #[error("Failed to open {} for appending: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The record could not be serialized or handed to the writer.
    #[error("Failed to write record: {0}")]
    Write(#[from] csv::Error),
    /// Buffered output could not be flushed to the target.
    #[error("Failed to flush record: {0}")]
    Flush(#[from] std::io::Error),
}

/// Opens `path` for appending, creating the file if it doesn't exist.
///
/// Missing parent directories are an error; they are never created.
pub fn open_for_append(path: &Path) -> Result<File, AppendError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppendError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// CSV writer matching the layout of the existing metrics files: comma
/// delimited, no header row, minimal quoting and `\r\n` line endings.
pub fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

/// Serializes a single record to `writer` and flushes it.
///
/// The csv writer buffers the whole line, so with a file opened in append
/// mode the line lands in one write.
pub fn append_record<W: Write>(writer: W, record: &FillRecord) -> Result<(), AppendError> {
    let mut csv_writer = csv_writer(writer);
    csv_writer.serialize(record)?;
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(record: &FillRecord) -> String {
        let mut output: Vec<u8> = vec![];
        append_record(&mut output, record).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plain_values_are_unquoted() {
        let record = FillRecord::new("100", "5.2", "3.1", "0.002");
        assert_eq!(written(&record), "100,5.2,3.1,0.002\r\n");
    }

    #[test]
    fn special_characters_are_quoted() {
        let record = FillRecord::new("1,5", "say \"hi\"", "two\nlines", "plain");
        assert_eq!(
            written(&record),
            "\"1,5\",\"say \"\"hi\"\"\",\"two\nlines\",plain\r\n"
        );
    }

    #[test]
    fn writes_land_after_existing_content() {
        let mut output: Vec<u8> = b"1,2,3,4\r\n".to_vec();
        append_record(&mut output, &FillRecord::new("5", "6", "7", "8")).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "1,2,3,4\r\n5,6,7,8\r\n");
    }

    #[test]
    fn missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("fills.csv");
        let err = open_for_append(&path).unwrap_err();
        assert!(matches!(err, AppendError::Open { .. }));
        assert!(err.to_string().contains("no_such_dir"));
        assert!(!path.exists());
    }
}
