use std::fmt::{Debug, Display, Formatter};

/// Failure classes for a request/replay run. The category decides nothing by
/// itself; fatality is the calling path's policy.
pub enum ReplayError {
    /// Transport-level failure (DNS, connection, timeout).
    Network(String),
    /// Local file or response-body read failure.
    Io(String),
    /// Response body could not be pretty-printed as JSON.
    Format(String),
    /// Log line malformed or absent on last-URL lookup.
    Parse(String),
}

impl Display for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::Network(details) => write!(f, "network error: {}", details),
            ReplayError::Io(details) => write!(f, "io error: {}", details),
            ReplayError::Format(details) => write!(f, "format error: {}", details),
            ReplayError::Parse(details) => write!(f, "parse error: {}", details),
        }
    }
}

impl Debug for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        return Display::fmt(self, f);
    }
}

impl std::error::Error for ReplayError {}
