use crate::errors::ReplayError;
use crate::log_record::LogRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Returns the URL of the most recent log line.
///
/// Scans linearly to end-of-file keeping only the last line seen, then splits
/// it on whitespace. Whatever the last line is decides the outcome: a
/// malformed trailing line fails even when earlier lines are fine, and an
/// empty or missing file never yields an empty URL.
pub fn last_url(log_path: &Path) -> Result<String, ReplayError> {
    let file = File::open(log_path).map_err(|reason| {
        ReplayError::Io(format!("couldn't open {}: {}", log_path.display(), reason))
    })?;

    let mut last_line = String::new();
    for result_line in BufReader::new(file).lines() {
        last_line = result_line.map_err(|reason| {
            ReplayError::Io(format!("couldn't read {}: {}", log_path.display(), reason))
        })?;
    }

    let fields: Vec<&str> = last_line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ReplayError::Parse(format!(
            "malformed last log line: '{}'",
            last_line
        )));
    }
    return Ok(fields[3].to_string());
}

/// Lazily yields every record in file order, reformatted for display. Lines
/// with too few fields are skipped with a warning on stdout; scanning
/// continues. The iterator owns the file handle and is consumed once.
pub fn records(log_path: &Path) -> Result<impl Iterator<Item = String>, ReplayError> {
    let file = File::open(log_path).map_err(|reason| {
        ReplayError::Io(format!("couldn't open {}: {}", log_path.display(), reason))
    })?;

    let iter = BufReader::new(file).lines().filter_map(|result_line| {
        let line = match result_line {
            Ok(line) => line,
            Err(reason) => {
                println!("skipping unreadable log line: {}", reason);
                return None;
            }
        };
        match LogRecord::parse(&line) {
            Some(record) => Some(record.display()),
            None => {
                println!("skipping malformed log line: '{}'", line);
                None
            }
        }
    });
    return Ok(iter);
}

#[cfg(test)]
mod tests {
    use super::{last_url, records};
    use crate::errors::ReplayError;
    use crate::log_writer::append;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_log(lines: &[&str]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let mut contents = lines.join("\n");
        if !lines.is_empty() {
            contents.push('\n');
        }
        fs::write(&log_path, contents).unwrap();
        (dir, log_path)
    }

    #[test]
    fn last_url_returns_most_recent_append() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        append(&log_path, "http://one.example", 200).unwrap();
        append(&log_path, "http://two.example", 500).unwrap();

        assert_eq!(last_url(&log_path).unwrap(), "http://two.example");
    }

    #[test]
    fn last_url_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = last_url(&dir.path().join("missing.log"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }

    #[test]
    fn last_url_fails_on_empty_file_instead_of_returning_empty_string() {
        let (_dir, log_path) = scratch_log(&[]);
        let result = last_url(&log_path);
        assert!(matches!(result, Err(ReplayError::Parse(_))));
    }

    #[test]
    fn last_url_fails_on_malformed_trailing_line() {
        let (_dir, log_path) = scratch_log(&[
            "log: 2024/01/05 10:11:12 http://example.com 200",
            "log: truncated",
        ]);
        let result = last_url(&log_path);
        assert!(matches!(result, Err(ReplayError::Parse(_))));
    }

    #[test]
    fn last_url_uses_wellformed_trailing_line_after_garbage() {
        let (_dir, log_path) = scratch_log(&[
            "log: truncated",
            "log: 2024/01/05 10:11:12 http://example.com 200",
        ]);
        assert_eq!(last_url(&log_path).unwrap(), "http://example.com");
    }

    #[test]
    fn records_formats_all_lines_in_file_order() {
        let (_dir, log_path) = scratch_log(&[
            "log: 2024/01/05 10:11:12 http://one.example 200",
            "log: 2024/01/05 10:11:13 http://two.example 404",
        ]);
        let formatted: Vec<String> = records(&log_path).unwrap().collect();
        assert_eq!(
            formatted,
            vec![
                "(2024/01/05 10:11:12) (http://one.example) - (200)",
                "(2024/01/05 10:11:13) (http://two.example) - (404)",
            ]
        );
    }

    #[test]
    fn records_skips_malformed_lines_and_continues() {
        let (_dir, log_path) = scratch_log(&[
            "log: truncated",
            "log: 2024/01/05 10:11:12 http://example.com 200",
        ]);
        let formatted: Vec<String> = records(&log_path).unwrap().collect();
        assert_eq!(formatted, vec!["(2024/01/05 10:11:12) (http://example.com) - (200)"]);
    }

    #[test]
    fn records_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(records(&dir.path().join("missing.log")).is_err());
    }

    #[test]
    fn records_matches_append_count_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        for (url, status) in [
            ("http://one.example", 200u16),
            ("http://two.example", 301),
            ("http://three.example", 503),
        ] {
            append(&log_path, url, status).unwrap();
        }

        let formatted: Vec<String> = records(&log_path).unwrap().collect();
        assert_eq!(formatted.len(), 3);
        assert!(formatted[0].contains("(http://one.example) - (200)"));
        assert!(formatted[1].contains("(http://two.example) - (301)"));
        assert!(formatted[2].contains("(http://three.example) - (503)"));
    }
}
