//! Deadline coercion.
//!
//! Deadlines are stored as UTC instants but enter the system as text typed
//! into the creation form. This module turns that text into a point in time.
//!
//! # Accepted formats
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `2025-03-01T09:30:00Z`, `2025-03-01T09:30:00+02:00` | RFC 3339, as written |
//! | `2025-03-01T09:30`, `2025-03-01 09:30:15` | Local date-time |
//! | `2025-03-01` | UTC midnight of that day |

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{ProtocolError, Result};

/// Format of a bare calendar date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Local date-time formats, tried in order.
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a deadline from its textual form.
///
/// Leading and trailing whitespace is ignored. Local date-times that fall
/// into a daylight-saving overlap resolve to the earlier instant.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDeadline`] if the text matches none of
/// the accepted formats, or [`ProtocolError::NonexistentLocalTime`] if it
/// names a wall-clock time skipped by a daylight-saving transition.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prodx_protocol::deadline::parse_deadline;
///
/// let deadline = parse_deadline("2025-03-01").unwrap();
/// assert_eq!(deadline, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
///
/// assert!(parse_deadline("next tuesday").is_err());
/// ```
pub fn parse_deadline(input: &str) -> Result<DateTime<Utc>> {
    let text = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .ok_or_else(|| ProtocolError::NonexistentLocalTime {
                    input: input.to_string(),
                });
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ProtocolError::InvalidDeadline {
        input: input.to_string(),
    })
}

/// Returns the text the creation form starts with: the current UTC date.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prodx_protocol::deadline::default_deadline_text;
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(default_deadline_text(now), "2025-01-15");
/// ```
#[must_use]
pub fn default_deadline_text(now: DateTime<Utc>) -> String {
    now.format(DATE_FORMAT).to_string()
}

/// Deserializes a deadline from any accepted textual form.
///
/// Intended for `#[serde(deserialize_with = "...")]` on deadline fields.
///
/// # Errors
///
/// Returns a deserialization error if the value is not a string or does
/// not parse as a deadline.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_deadline(&text).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(text: &str, format: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(text, format).expect("naive");
        Local
            .from_local_datetime(&naive)
            .earliest()
            .expect("local time exists")
            .with_timezone(&Utc)
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        let parsed = parse_deadline("2025-03-01").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_keeps_offset() {
        let parsed = parse_deadline("2025-03-01T09:30:00+02:00").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap());

        let parsed = parse_deadline("2025-03-01T09:30:00Z").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn picker_format_is_local_time() {
        let parsed = parse_deadline("2025-06-10T14:45").expect("parse");
        assert_eq!(parsed, local("2025-06-10T14:45", "%Y-%m-%dT%H:%M"));
    }

    #[test]
    fn space_separated_datetime_with_seconds() {
        let parsed = parse_deadline("2025-06-10 14:45:30").expect("parse");
        assert_eq!(parsed, local("2025-06-10 14:45:30", "%Y-%m-%d %H:%M:%S"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let parsed = parse_deadline("  2025-03-01 \n").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        for input in ["", "tomorrow", "2025-13-01", "2025-02-30", "01/03/2025"] {
            let err = parse_deadline(input).expect_err(input);
            assert!(matches!(err, ProtocolError::InvalidDeadline { .. }));
        }
    }

    #[test]
    fn default_text_is_parseable() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
        let text = default_deadline_text(now);
        assert_eq!(text, "2024-02-29");
        assert_eq!(
            parse_deadline(&text).expect("parse"),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn deserialize_accepts_textual_forms() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize")]
            deadline: DateTime<Utc>,
        }

        let wrapper: Wrapper =
            serde_json::from_str(r#"{"deadline": "2025-03-01"}"#).expect("deserialize");
        assert_eq!(
            wrapper.deadline,
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );

        let result: std::result::Result<Wrapper, _> =
            serde_json::from_str(r#"{"deadline": "soon"}"#);
        assert!(result.is_err());
    }
}
