use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

const DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DATE_TIME_SUBSECOND_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

// As produced by HTML `datetime-local` inputs
const DATE_TIME_MINUTES_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Calendar day or point in time of an activity.
///
/// The textual representation is preserved as far as possible,
/// i.e. a plain date is never expanded into a date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityDate {
    /// `2024-05-01`
    Day(Date),
    /// `2024-05-01T18:30:00` (no time zone)
    Local(PrimitiveDateTime),
    /// `2024-05-01T18:30:00Z` or `2024-05-01T18:30:00+02:00`
    Offset(OffsetDateTime),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid activity date: {0:?}")]
pub struct ActivityDateParseError(String);

impl ActivityDate {
    pub fn date(&self) -> Date {
        match self {
            Self::Day(date) => *date,
            Self::Local(date_time) => date_time.date(),
            Self::Offset(date_time) => date_time.date(),
        }
    }
}

impl FromStr for ActivityDate {
    type Err = ActivityDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = Date::parse(s, DATE_FORMAT) {
            return Ok(Self::Day(date));
        }
        if let Ok(date_time) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self::Offset(date_time));
        }
        [
            DATE_TIME_FORMAT,
            DATE_TIME_SUBSECOND_FORMAT,
            DATE_TIME_MINUTES_FORMAT,
        ]
        .into_iter()
        .find_map(|format| PrimitiveDateTime::parse(s, format).ok())
        .map(Self::Local)
        .ok_or_else(|| ActivityDateParseError(s.to_owned()))
    }
}

impl fmt::Display for ActivityDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = match self {
            Self::Day(date) => date.format(DATE_FORMAT),
            Self::Local(date_time) => {
                if date_time.nanosecond() == 0 {
                    date_time.format(DATE_TIME_FORMAT)
                } else {
                    date_time.format(DATE_TIME_SUBSECOND_FORMAT)
                }
            }
            Self::Offset(date_time) => date_time.format(&Rfc3339),
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl From<Date> for ActivityDate {
    fn from(from: Date) -> Self {
        Self::Day(from)
    }
}

impl From<PrimitiveDateTime> for ActivityDate {
    fn from(from: PrimitiveDateTime) -> Self {
        Self::Local(from)
    }
}

impl From<OffsetDateTime> for ActivityDate {
    fn from(from: OffsetDateTime) -> Self {
        Self::Offset(from)
    }
}
