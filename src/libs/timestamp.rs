//! Conversion of source timestamps into epoch seconds.
//!
//! The output model stores every point in time as whole seconds since the Unix
//! epoch. Sources hand us either full timestamps or calendar dates without a
//! time of day; dates resolve to midnight UTC.

use super::error::MigrationError;
use chrono::{DateTime, NaiveDate, Utc};

/// Format of date-only fields such as task due dates.
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Whole seconds since the epoch; the sub-second part is dropped.
pub fn to_epoch(timestamp: &DateTime<Utc>) -> i64 {
    timestamp.timestamp()
}

/// Like [`to_epoch`], mapping a not-yet-occurred (absent) timestamp to zero.
pub fn to_epoch_or_zero(timestamp: Option<&DateTime<Utc>>) -> i64 {
    timestamp.map(to_epoch).unwrap_or(0)
}

/// Parses a `YYYY-MM-DD` date and returns the epoch of its midnight in UTC.
///
/// # Errors
///
/// Returns [`MigrationError::TimestampFormat`] for anything that is not a
/// valid calendar date in that exact shape.
pub fn date_only_to_epoch(value: &str) -> Result<i64, MigrationError> {
    let date = NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT).map_err(|e| MigrationError::timestamp_format(value, e))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_epoch_truncates_fraction() {
        let ts = DateTime::parse_from_rfc3339("2013-08-30T08:29:46.903Z").unwrap().with_timezone(&Utc);
        assert_eq!(to_epoch(&ts), 1377851386);
    }

    #[test]
    fn test_absent_timestamp_is_zero() {
        assert_eq!(to_epoch_or_zero(None), 0);
        let ts = Utc.with_ymd_and_hms(2013, 8, 2, 11, 58, 55).unwrap();
        assert_eq!(to_epoch_or_zero(Some(&ts)), 1375444735);
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(date_only_to_epoch("2013-09-05").unwrap(), 1378339200);
        assert_eq!(date_only_to_epoch("1970-01-01").unwrap(), 0);
    }

    #[test]
    fn test_date_only_rejects_garbage() {
        for bad in ["", "2013-13-01", "05.09.2013", "2013-09-05T00:00:00Z"] {
            let err = date_only_to_epoch(bad).unwrap_err();
            assert!(matches!(err, MigrationError::TimestampFormat { ref value, .. } if value == bad));
        }
    }
}
