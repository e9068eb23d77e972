//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Epoch milliseconds for a timestamp (the wire format for all timing fields)
pub fn epoch_ms(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Format remaining milliseconds as an MM:SS clock
pub fn format_clock(ms: i64) -> String {
    let ms = ms.max(0);
    let mins = ms / 60_000;
    let secs = (ms % 60_000) / 1000;
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61_000), "01:01");
        assert_eq!(format_clock(5_400_000), "90:00");
        assert_eq!(format_clock(-5), "00:00");
    }

    #[test]
    fn test_epoch_ms() {
        let dt = DateTime::parse_from_rfc3339("1970-01-01T00:00:01Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(epoch_ms(dt), 1000);
    }
}
