use chrono::Local;

// Every record line starts with this fixed token, followed by date, time,
// url and status code, all whitespace-separated.
pub const LOG_PREFIX: &str = "log:";

const DATE_FORMAT: &str = "%Y/%m/%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// One logged request outcome. The status is kept textual on the read side so
/// that display never has to re-validate what the file already holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub time: String,
    pub url: String,
    pub status: String,
}

impl LogRecord {
    pub fn now(url: &str, status: u16) -> LogRecord {
        let stamp = Local::now();
        return LogRecord {
            date: stamp.format(DATE_FORMAT).to_string(),
            time: stamp.format(TIME_FORMAT).to_string(),
            url: url.to_string(),
            status: status.to_string(),
        };
    }

    /// Parses one log line. Returns `None` for any line with fewer than the
    /// five expected fields; extra trailing fields are tolerated.
    pub fn parse(line: &str) -> Option<LogRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 {
            return None;
        }
        return Some(LogRecord {
            date: fields[1].to_string(),
            time: fields[2].to_string(),
            url: fields[3].to_string(),
            status: fields[4].to_string(),
        });
    }

    pub fn to_line(&self) -> String {
        return format!(
            "{} {} {} {} {}",
            LOG_PREFIX, self.date, self.time, self.url, self.status
        );
    }

    /// History display form: `(<date> <time>) (<url>) - (<status>)`.
    pub fn display(&self) -> String {
        return format!("({} {}) ({}) - ({})", self.date, self.time, self.url, self.status);
    }
}
