// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game slot parsing and resolution.
//!
//! A game slot is entered as a calendar date plus a wall-clock time. To
//! compare it with "now" the slot is resolved to a single instant in the
//! declared timezone.
//!
//! ## Invariants
//!
//! - Dates are `YYYY-MM-DD`; times are `HH:MM` with optional `:SS`
//! - Slots that are ambiguous or non-existent because of a DST transition
//!   are rejected rather than guessed

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use time::macros::format_description;
use time::{Date, Time};

/// Parses an IANA timezone identifier such as `Asia/Seoul`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the identifier is unknown.
pub fn parse_timezone(value: &str) -> Result<Tz, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(value.to_string()))
}

/// Parses a game date.
///
/// Only the first ten characters are considered, so backend timestamps like
/// `2026-10-24T00:00:00` are accepted.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value is not `YYYY-MM-DD`.
pub fn parse_game_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    let candidate: &str = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(candidate, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Parses a game time in `HH:MM` or `HH:MM:SS` form.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the value matches neither form.
pub fn parse_game_time(value: &str) -> Result<Time, DomainError> {
    let trimmed: &str = value.trim();
    Time::parse(trimmed, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(trimmed, format_description!("[hour]:[minute]")))
        .map_err(|e| DomainError::TimeParseError {
            time_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_game_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a time as `HH:MM`.
#[must_use]
pub fn format_game_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Resolves a wall-clock game slot to an instant in `tz`.
///
/// # Arguments
///
/// * `date` - The calendar date of the game
/// * `time` - The wall-clock start time of the game
/// * `tz` - The timezone the slot was entered in
///
/// # Errors
///
/// Returns `DomainError::UnresolvableSchedule` if the slot is ambiguous or
/// does not exist in `tz`.
pub fn resolve_game_instant(date: Date, time: Time, tz: Tz) -> Result<DateTime<Utc>, DomainError> {
    // Convert time::Date to chrono::NaiveDate
    let naive_date: NaiveDate =
        NaiveDate::from_ymd_opt(date.year(), date.month() as u32, u32::from(date.day()))
            .ok_or_else(|| DomainError::UnresolvableSchedule {
                reason: format!("invalid date {}", format_game_date(date)),
            })?;

    // Convert time::Time to chrono::NaiveTime
    let naive_time: NaiveTime = NaiveTime::from_hms_opt(
        u32::from(time.hour()),
        u32::from(time.minute()),
        u32::from(time.second()),
    )
    .ok_or_else(|| DomainError::UnresolvableSchedule {
        reason: format!("invalid time {}", format_game_time(time)),
    })?;

    let local = tz
        .from_local_datetime(&naive_date.and_time(naive_time))
        .single()
        .ok_or_else(|| DomainError::UnresolvableSchedule {
            reason: format!(
                "{} {} is ambiguous or does not exist in {tz}",
                format_game_date(date),
                format_game_time(time)
            ),
        })?;

    Ok(local.with_timezone(&Utc))
}
