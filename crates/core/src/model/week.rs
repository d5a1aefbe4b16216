use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use std::fmt;
use thiserror::Error;

//
// ─── WEEK TYPES ────────────────────────────────────────────────────────────────
//

/// A validation failure for a picked week date.
///
/// The messages are user-facing: they end up verbatim in the error banner.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WeekDateError {
    #[error("Please select a date first.")]
    Missing,
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    Invalid,
    #[error("Please select a Wednesday.")]
    NotWednesday,
}

/// The Wednesday a farming week starts on.
///
/// Drop resets happen on Wednesdays, so every stored week is keyed by its
/// Wednesday date. A `WeekStart` can only be constructed from a date that
/// actually falls on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// Parses an ISO `YYYY-MM-DD` string into a validated week start.
    ///
    /// # Errors
    ///
    /// Returns `WeekDateError` when the input is empty, not an ISO date, or
    /// does not fall on a Wednesday.
    pub fn parse(value: &str) -> Result<Self, WeekDateError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(WeekDateError::Missing);
        }
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| WeekDateError::Invalid)?;
        if date.weekday() != Weekday::Wed {
            return Err(WeekDateError::NotWednesday);
        }
        Ok(Self(date))
    }

    /// The most recent Wednesday at or before the given instant (UTC).
    #[must_use]
    pub fn most_recent(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let days_since_wednesday =
            (today.weekday().num_days_from_monday() as i64 - 2).rem_euclid(7);
        Self(today - Duration::days(days_since_wednesday))
    }

    /// The Wednesday one week before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        Self(self.0 - Duration::weeks(1))
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The ISO `YYYY-MM-DD` form used as the retrieval query parameter.
    #[must_use]
    pub fn as_query(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
