use std::io::Write;
use std::path::Path;

mod appender;
pub mod cli;
mod record;

pub use appender::AppendError;
pub use record::{FillRecord, FIELD_COUNT};

/// Appends one record to the CSV file at `path`, creating the file if
/// needed. Previously written lines are left untouched and no header row
/// is ever written.
pub fn append_to_csv<P: AsRef<Path>>(path: P, record: &FillRecord) -> Result<(), AppendError> {
    let path = path.as_ref();
    let file = appender::open_for_append(path)?;
    log::debug!("Appending fill record to {}", path.display());
    appender::append_record(file, record)
}

/// Builds a record from raw argument values and appends it to `path`.
///
/// The values are checked before the file is opened, so a short argument
/// list never creates or touches the target.
pub fn append_values<P, S>(path: P, values: &[S]) -> Result<(), AppendError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let record = FillRecord::try_from(values)?;
    append_to_csv(path, &record)
}

/// Writes a single record, in the same layout as [`append_to_csv`], to any
/// writer.
pub fn write_record<W: Write>(writer: W, record: &FillRecord) -> Result<(), AppendError> {
    appender::append_record(writer, record)
}
