//! Human-readable validity window explanation
//!
//! Purely informational. It deliberately does not share the compliance
//! check's boundary rules: at exactly `not_before` a certificate reads as
//! currently valid here.

use crate::certificate::info::ParsedCertificate;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Where "now" falls relative to a certificate's validity window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidityStatus {
    NotYetValid {
        days_until_valid: i64,
        not_before: DateTime<Utc>,
    },
    Expired {
        days_since_expiry: i64,
        not_after: DateTime<Utc>,
    },
    Valid {
        days_remaining: i64,
        not_after: DateTime<Utc>,
    },
}

impl fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityStatus::NotYetValid {
                days_until_valid,
                not_before,
            } => write!(
                f,
                "Certificate is not yet valid. Will become valid in {} days (on {})",
                days_until_valid,
                format_date(not_before)
            ),
            ValidityStatus::Expired {
                days_since_expiry,
                not_after,
            } => write!(
                f,
                "Certificate has expired {} days ago (on {})",
                days_since_expiry,
                format_date(not_after)
            ),
            ValidityStatus::Valid {
                days_remaining,
                not_after,
            } => write!(
                f,
                "Certificate is currently valid. Expires in {} days (on {})",
                days_remaining,
                format_date(not_after)
            ),
        }
    }
}

/// Explain a certificate's validity as of the current time
pub fn explain_validity(cert: &ParsedCertificate) -> String {
    validity_status_at(Utc::now(), cert.not_before, cert.not_after).to_string()
}

pub fn validity_status_at(
    now: DateTime<Utc>,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
) -> ValidityStatus {
    if now < not_before {
        ValidityStatus::NotYetValid {
            days_until_valid: whole_days(not_before, now),
            not_before,
        }
    } else if now > not_after {
        ValidityStatus::Expired {
            days_since_expiry: whole_days(now, not_after),
            not_after,
        }
    } else {
        ValidityStatus::Valid {
            days_remaining: whole_days(not_after, now),
            not_after,
        }
    }
}

/// Whole days from `earlier` to `later`, truncated toward zero
fn whole_days(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    (later - earlier).num_hours() / 24
}

/// e.g. "Jan 2, 2006"
fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_expired() {
        let not_after = now() - Duration::days(10);
        let status = validity_status_at(now(), not_after - Duration::days(365), not_after);
        assert_eq!(
            status.to_string(),
            "Certificate has expired 10 days ago (on Mar 5, 2025)"
        );
    }

    #[test]
    fn test_not_yet_valid() {
        let not_before = now() + Duration::days(3) + Duration::hours(5);
        let status = validity_status_at(now(), not_before, not_before + Duration::days(90));
        assert_eq!(
            status,
            ValidityStatus::NotYetValid {
                days_until_valid: 3,
                not_before
            }
        );
        assert!(status.to_string().contains("Will become valid in 3 days"));
    }

    #[test]
    fn test_partial_day_truncates() {
        let not_after = now() + Duration::hours(47);
        let status = validity_status_at(now(), now() - Duration::days(1), not_after);
        assert_eq!(
            status,
            ValidityStatus::Valid {
                days_remaining: 1,
                not_after
            }
        );
    }

    #[test]
    fn test_boundary_at_not_before_is_valid() {
        let status = validity_status_at(now(), now(), now() + Duration::days(30));
        assert!(matches!(status, ValidityStatus::Valid { days_remaining: 30, .. }));
    }
}
