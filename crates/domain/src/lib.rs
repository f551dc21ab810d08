// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod draft;
mod error;
mod personnel;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use draft::{PostDetails, PostDraft};
pub use error::DomainError;
pub use personnel::{
    AGGREGATE_COUNT_MAX, POSITION_COUNT_MAX, PersonnelSelection, Position, PositionCounts,
};
pub use schedule::{
    format_game_date, format_game_time, parse_game_date, parse_game_time, parse_timezone,
    resolve_game_instant,
};
pub use types::{
    Author, ParticipantType, PositionMode, RecruitCategory, RecruitStatus, RecruitTargetType,
    RecruitmentFlow,
};
pub use validation::{
    Advisory, CONTENT_ADVISORY_MIN_CHARS, Field, Finding, FindingKind, LARGE_SQUAD_TOTAL,
    STARTS_SOON_MINUTES, Severity, TITLE_ADVISORY_MAX_CHARS, ValidatedDraft, ValidationContext,
    ValidationReport, evaluate_rules, validate_for_submit,
};
