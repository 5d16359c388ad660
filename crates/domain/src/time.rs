//! Time and timestamp helpers.
//!
//! Timestamps are UTC everywhere inside the workspace; conversion to the
//! server's local zone happens only at the rendering edge, through the
//! helpers below.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for `send_at`, `created_at`, `updated_at`, etc.
pub type Timestamp = DateTime<Utc>;

/// Format accepted and produced by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Default send time offered by the schedule form: five minutes from `from`.
#[must_use]
pub fn default_send_at(from: Timestamp) -> Timestamp {
    from + chrono::Duration::minutes(5)
}

/// Parse a `datetime-local` form value into a UTC timestamp.
///
/// The value carries no zone, so it is interpreted in the server's local
/// zone. Browsers normally send minute precision but may include seconds.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSendAt`] when the value does not parse
/// or names a local time that does not exist (spring-forward gap).
pub fn parse_datetime_local(value: &str) -> Result<Timestamp, ValidationError> {
    let trimmed = value.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATETIME_LOCAL_FORMAT))
        .map_err(|_| ValidationError::InvalidSendAt(value.to_string()))?;
    // Ambiguous local times (fall-back overlap) resolve to the earlier one.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ValidationError::InvalidSendAt(value.to_string()))
}

/// Format a timestamp as a `datetime-local` form value in the server's
/// local zone.
#[must_use]
pub fn format_datetime_local(ts: Timestamp) -> String {
    ts.with_timezone(&Local)
        .format(DATETIME_LOCAL_FORMAT)
        .to_string()
}

/// Format a timestamp for display, in the server's local zone.
#[must_use]
pub fn format_local(ts: Timestamp) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_offset_default_send_time_by_five_minutes() {
        let from = now();
        let send_at = default_send_at(from);
        assert_eq!((send_at - from).num_seconds(), 300);
    }

    #[test]
    fn should_parse_minute_precision_value() {
        // Mid-January at mid-morning sits outside DST transitions in
        // every populated zone.
        let ts = parse_datetime_local("2031-01-15T10:30").unwrap();
        assert_eq!(format_datetime_local(ts), "2031-01-15T10:30");
    }

    #[test]
    fn should_parse_second_precision_value() {
        let with_seconds = parse_datetime_local("2031-01-15T10:30:45").unwrap();
        let without = parse_datetime_local("2031-01-15T10:30").unwrap();
        assert_eq!((with_seconds - without).num_seconds(), 45);
    }

    #[test]
    fn should_tolerate_surrounding_whitespace() {
        let ts = parse_datetime_local(" 2031-01-15T10:30 ").unwrap();
        assert_eq!(format_datetime_local(ts), "2031-01-15T10:30");
    }

    #[test]
    fn should_reject_garbage_value() {
        let err = parse_datetime_local("soon").unwrap_err();
        assert_eq!(err, ValidationError::InvalidSendAt("soon".to_string()));
    }

    #[test]
    fn should_reject_empty_value() {
        assert!(parse_datetime_local("").is_err());
    }
}
