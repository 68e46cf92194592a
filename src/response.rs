use chrono::DateTime;
use chrono::Local;

/// Layout of the body timestamp, e.g. `2026-08-07 14:03:59 +0200`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Builds the full response: CRLF-terminated status line and header
/// section, then a body with no trailing newline.
pub fn build_response(now: DateTime<Local>) -> String {
    format!(
        "HTTP/1.1 200\r\nContent-Type: text/html\r\n\r\nHello world! The time is {}",
        now.format(TIMESTAMP_FORMAT)
    )
}
