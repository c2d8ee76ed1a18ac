//! Check-in timer rules.
//!
//! A check-in session is a time-boxed promise to confirm safety before a
//! deadline. The deadline is fixed at creation; the server decides whether
//! escalation is legitimate by comparing the persisted deadline against its
//! own clock, never by trusting the client's countdown.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Validate a client-supplied check-in duration.
///
/// Must be a positive, finite number of minutes. Fractional durations are
/// allowed (`0.5` is thirty seconds).
pub fn validate_duration_minutes(minutes: f64) -> Result<(), CoreError> {
    if !minutes.is_finite() {
        return Err(CoreError::Validation(
            "durationMinutes must be a finite number".into(),
        ));
    }
    if minutes <= 0.0 {
        return Err(CoreError::Validation(
            "durationMinutes must be positive".into(),
        ));
    }
    Ok(())
}

/// Compute the fixed expiry deadline for a session started at `now`.
///
/// `expires_at = now + durationMinutes * 60s`, at millisecond precision.
pub fn expiry_deadline(now: Timestamp, duration_minutes: f64) -> Timestamp {
    now + Duration::milliseconds((duration_minutes * 60_000.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_positive_duration_accepted() {
        assert!(validate_duration_minutes(60.0).is_ok());
        assert!(validate_duration_minutes(0.5).is_ok());
    }

    #[test]
    fn test_zero_and_negative_duration_rejected() {
        assert_matches!(validate_duration_minutes(0.0), Err(CoreError::Validation(_)));
        assert_matches!(validate_duration_minutes(-5.0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_nan_and_infinite_duration_rejected() {
        assert!(validate_duration_minutes(f64::NAN).is_err());
        assert!(validate_duration_minutes(f64::INFINITY).is_err());
    }

    #[test]
    fn test_expiry_deadline_arithmetic() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let deadline = expiry_deadline(now, 60.0);
        assert_eq!(deadline, now + Duration::hours(1));
    }

    #[test]
    fn test_fractional_minutes_resolve_to_milliseconds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let deadline = expiry_deadline(now, 0.5);
        assert_eq!(deadline, now + Duration::seconds(30));
    }
}
