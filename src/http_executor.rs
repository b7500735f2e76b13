use crate::errors::ReplayError;
use crate::log_writer;
use reqwest::header::HeaderMap;
use std::path::Path;

/// The displayable parts of a completed request.
pub struct ExecutedResponse {
    pub status: u16,
    pub headers_text: String,
    pub body_text: String,
}

/// Performs a blocking GET against `url`, formats the outcome and appends one
/// record to the log.
///
/// The body must be valid JSON: a non-JSON body fails the whole operation
/// with a format error even though the request itself succeeded. An empty
/// body counts as non-JSON. Nothing is logged when the transport or the body
/// read fails.
pub fn execute(
    client: &reqwest::blocking::Client,
    log_path: &Path,
    url: &str,
) -> Result<ExecutedResponse, ReplayError> {
    let response = client.get(url).send().map_err(|reason| {
        ReplayError::Network(format!("request to '{}' failed: {}", url, reason))
    })?;

    let status = response.status().as_u16();
    let headers_text = format_headers(response.headers());
    let body = response.bytes().map_err(|reason| {
        ReplayError::Io(format!("couldn't read response body: {}", reason))
    })?;
    let body_text = format_json(&body)?;

    log_writer::append(log_path, url, status)?;

    return Ok(ExecutedResponse { status, headers_text, body_text });
}

/// One `name: [values]` line per header key, values in their raw string-list
/// representation.
pub fn format_headers(headers: &HeaderMap) -> String {
    let mut result = String::new();
    for key in headers.keys() {
        let values: Vec<&str> = headers
            .get_all(key)
            .iter()
            .map(|value| value.to_str().unwrap_or("<opaque>"))
            .collect();
        result.push_str(&format!("{}: {:?}\n", key, values));
    }
    return result;
}

/// Re-serializes JSON bytes with 2-space indentation.
pub fn format_json(body: &[u8]) -> Result<String, ReplayError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|reason| {
        ReplayError::Format(format!("response body is not valid json: {}", reason))
    })?;
    return serde_json::to_string_pretty(&value)
        .map_err(|reason| ReplayError::Format(reason.to_string()));
}
