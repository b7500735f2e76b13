use crate::errors::ReplayError;
use crate::log_record::LogRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Appends one record line for a completed request, creating the log file if
/// absent. The handle is scoped to this call; nothing is kept open between
/// appends.
pub fn append(log_path: &Path, url: &str, status: u16) -> Result<(), ReplayError> {
    let record = LogRecord::now(url, status);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|reason| {
            ReplayError::Io(format!("couldn't open {}: {}", log_path.display(), reason))
        })?;
    writeln!(file, "{}", record.to_line()).map_err(|reason| {
        ReplayError::Io(format!("couldn't write to {}: {}", log_path.display(), reason))
    })?;
    return Ok(());
}
