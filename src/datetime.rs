//! Date and time literal parsing.
//!
//! TOML has three temporal representations this crate supports: an instant
//! with a UTC offset, a local date-time, and a local date. A trimmed literal
//! is matched against them with an ordered fallback; nothing is ever guessed
//! (no default offset, no default time component).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};

/// One of the three temporal representations of a TOML date-time value.
///
/// # Examples
///
/// ```rust
/// use toml_tree::TomlDateTime;
///
/// let instant = TomlDateTime::parse("2021-01-01 10:00:00Z", 1).unwrap();
/// assert!(matches!(instant, TomlDateTime::Offset(_)));
///
/// let date = TomlDateTime::parse("2021-01-01", 1).unwrap();
/// assert!(matches!(date, TomlDateTime::Date(_)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TomlDateTime {
    /// An offset date-time, normalized to UTC.
    Offset(DateTime<Utc>),
    /// A date-time without any offset.
    Local(NaiveDateTime),
    /// A date without a time component.
    Date(NaiveDate),
}

impl TomlDateTime {
    /// Parses a trimmed literal, attempting each representation in order and
    /// stopping at the first success:
    ///
    /// 1. an RFC 3339 offset instant;
    /// 2. the literal with its first space replaced by `T`, again as an
    ///    offset instant (TOML permits a space in place of the `T`);
    /// 3. a local date-time;
    /// 4. a local date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] reporting the original literal and line when
    /// all four attempts fail.
    pub fn parse(literal: &str, line: usize) -> Result<Self> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(literal) {
            return Ok(TomlDateTime::Offset(instant.with_timezone(&Utc)));
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(&literal.replacen(' ', "T", 1)) {
            return Ok(TomlDateTime::Offset(instant.with_timezone(&Utc)));
        }

        if let Ok(local) = NaiveDateTime::parse_from_str(literal, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(TomlDateTime::Local(local));
        }

        if let Ok(date) = NaiveDate::parse_from_str(literal, "%Y-%m-%d") {
            return Ok(TomlDateTime::Date(date));
        }

        Err(Error::parse(
            format!("cannot parse <{literal}> as a date, date-time, or offset date-time"),
            line,
        ))
    }
}

impl fmt::Display for TomlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlDateTime::Offset(instant) => {
                write!(f, "{}", instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            TomlDateTime::Local(local) => {
                write!(f, "{}", local.format("%Y-%m-%dT%H:%M:%S%.f"))
            }
            TomlDateTime::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_offset_instant() {
        let parsed = TomlDateTime::parse("2021-01-01T10:00:00Z", 1).unwrap();
        match parsed {
            TomlDateTime::Offset(instant) => assert_eq!(instant.hour(), 10),
            other => panic!("expected offset instant, got {other:?}"),
        }
    }

    #[test]
    fn offset_is_normalized_to_utc() {
        let plus_two = TomlDateTime::parse("2021-01-01T12:00:00+02:00", 1).unwrap();
        let zulu = TomlDateTime::parse("2021-01-01T10:00:00Z", 1).unwrap();
        assert_eq!(plus_two, zulu);
    }

    #[test]
    fn accepts_space_instead_of_t() {
        let parsed = TomlDateTime::parse("2021-01-01 10:00:00Z", 1).unwrap();
        assert!(matches!(parsed, TomlDateTime::Offset(_)));
    }

    #[test]
    fn parses_local_date_time() {
        let parsed = TomlDateTime::parse("1979-05-27T07:32:00", 1).unwrap();
        assert!(matches!(parsed, TomlDateTime::Local(_)));
    }

    #[test]
    fn parses_local_date_time_with_fraction() {
        let parsed = TomlDateTime::parse("1979-05-27T00:32:00.999999", 1).unwrap();
        match parsed {
            TomlDateTime::Local(local) => assert_eq!(local.nanosecond(), 999_999_000),
            other => panic!("expected local date-time, got {other:?}"),
        }
    }

    #[test]
    fn parses_local_date() {
        let parsed = TomlDateTime::parse("1979-05-27", 1).unwrap();
        assert!(matches!(parsed, TomlDateTime::Date(_)));
    }

    #[test]
    fn rejects_garbage() {
        let err = TomlDateTime::parse("yesterday", 9).unwrap_err();
        assert!(err.to_string().contains("<yesterday>"));
        assert_eq!(err.line(), Some(9));
    }

    #[test]
    fn local_date_time_with_space_is_rejected() {
        // The space-for-T allowance applies to offset instants only.
        assert!(TomlDateTime::parse("1979-05-27 07:32:00", 1).is_err());
    }

    #[test]
    fn displays_round_trip_forms() {
        let instant = TomlDateTime::parse("2021-01-01T10:00:00Z", 1).unwrap();
        assert_eq!(instant.to_string(), "2021-01-01T10:00:00Z");

        let local = TomlDateTime::parse("1979-05-27T07:32:00", 1).unwrap();
        assert_eq!(local.to_string(), "1979-05-27T07:32:00");

        let date = TomlDateTime::parse("1979-05-27", 1).unwrap();
        assert_eq!(date.to_string(), "1979-05-27");
    }
}
