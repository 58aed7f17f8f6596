//! GData timestamps

use chrono::{DateTime, FixedOffset};

use crate::error::{AtomError, AtomResult};

/// Parse an Atom date construct such as `2013-02-10T10:35:30.455Z`.
///
/// The API emits RFC 3339 timestamps with optional fractional seconds.
/// Surrounding whitespace is ignored.
pub fn parse_timestamp(value: &str) -> AtomResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|source| AtomError::Timestamp {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_utc_with_millis() {
        let ts = parse_timestamp("2013-02-10T10:35:30.455Z").unwrap();
        assert_eq!(ts.year(), 2013);
        assert_eq!(ts.month(), 2);
        assert_eq!(ts.day(), 10);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.timestamp_subsec_millis(), 455);
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_offset() {
        let ts = parse_timestamp("2013-02-10T10:35:30+05:30").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(parse_timestamp("\n  2013-02-10T10:35:30Z \n").is_ok());
    }

    #[test]
    fn test_invalid() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("yesterday"));
    }
}
