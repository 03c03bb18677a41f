//! Time conversion utilities for mediasort
//!
//! This module converts the UTC timestamps published by the release feed
//! into local calendar dates.

use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDate};

/// Converts an RFC 3339 UTC timestamp into the local calendar date
///
/// # Arguments
/// * `utc_str` - Timestamp such as `2024-03-01T12:00:00Z`
///
/// # Returns
/// Returns the date in the local timezone
pub fn utc_to_local_date(utc_str: &str) -> Result<NaiveDate> {
    let utc_time =
        DateTime::parse_from_rfc3339(utc_str).map_err(|source| Error::ReleaseDateParseError {
            value: utc_str.to_string(),
            source,
        })?;
    Ok(utc_time.with_timezone(&Local).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_to_local_date_zulu_suffix() {
        let date = utc_to_local_date("2024-03-01T12:00:00Z").unwrap();
        let utc_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        // Any local offset keeps noon UTC within a day of the UTC date
        assert!((date - utc_date).num_days().abs() <= 1);
    }

    #[test]
    fn test_utc_to_local_date_with_offset() {
        assert!(utc_to_local_date("2023-12-31T23:30:00+00:00").is_ok());
    }

    #[test]
    fn test_utc_to_local_date_invalid() {
        let error = utc_to_local_date("yesterday").unwrap_err();
        assert!(matches!(error, Error::ReleaseDateParseError { .. }));
    }
}
