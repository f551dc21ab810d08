// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::Field;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Title, content or region is empty after trimming.
    MissingRequiredFields {
        /// The required fields that were empty, in check order.
        fields: Vec<Field>,
    },
    /// Game date or game time has not been selected.
    MissingSchedule,
    /// The selected game slot is not strictly after the current instant.
    ScheduleInPast {
        /// The selected slot, rendered as `YYYY-MM-DD HH:MM`.
        scheduled: String,
    },
    /// The selected wall-clock time does not map to exactly one instant.
    UnresolvableSchedule {
        /// Description of why the slot could not be resolved.
        reason: String,
    },
    /// No position or person has been selected.
    NoPersonnelSelected,
    /// Team name is required for team-to-individual mercenary posts.
    MissingTeamName,
    /// Timezone identifier is not a known IANA zone.
    InvalidTimezone(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Position tag is not one of FW, MF, DF, GK, ALL.
    InvalidPosition(String),
    /// A preferred positions entry is not of the form `TAG:COUNT`.
    InvalidPositionEntry(String),
    /// Recruit category is not one of MERCENARY, TEAM, MATCH.
    InvalidCategory(String),
    /// Recruitment flow is not TEAM_TO_INDIVIDUAL or INDIVIDUAL_TO_TEAM.
    InvalidRecruitmentFlow(String),
    /// Position mode is not SIMPLE or DETAILED.
    InvalidPositionMode(String),
    /// Recruit status is unknown.
    InvalidStatus(String),
    /// Target type is not USER or TEAM.
    InvalidTargetType(String),
    /// Participant type is not INDIVIDUAL or TEAM.
    InvalidParticipantType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields { .. } => {
                write!(f, "제목, 내용, 지역은 필수 입력 항목입니다.")
            }
            Self::MissingSchedule => write!(f, "경기 날짜와 시간은 필수 입력 항목입니다."),
            Self::ScheduleInPast { .. } => write!(
                f,
                "과거 날짜와 시간은 선택할 수 없습니다. 현재 시간 이후로 선택해주세요."
            ),
            Self::UnresolvableSchedule { reason } => {
                write!(f, "경기 시간을 확인할 수 없습니다: {reason}")
            }
            Self::NoPersonnelSelected => {
                write!(f, "최소 1개 이상의 포지션과 인원을 선택해주세요.")
            }
            Self::MissingTeamName => write!(f, "팀 이름은 필수 입력 항목입니다."),
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
            Self::InvalidPosition(tag) => write!(f, "Invalid position: {tag}"),
            Self::InvalidPositionEntry(entry) => {
                write!(f, "Invalid preferred position entry: '{entry}'")
            }
            Self::InvalidCategory(value) => write!(f, "Invalid recruit category: {value}"),
            Self::InvalidRecruitmentFlow(value) => {
                write!(f, "Invalid recruitment flow: {value}")
            }
            Self::InvalidPositionMode(value) => write!(f, "Invalid position mode: {value}"),
            Self::InvalidStatus(value) => write!(f, "Invalid recruit status: {value}"),
            Self::InvalidTargetType(value) => write!(f, "Invalid target type: {value}"),
            Self::InvalidParticipantType(value) => {
                write!(f, "Invalid participant type: {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
