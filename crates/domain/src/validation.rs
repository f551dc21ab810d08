// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule evaluation for recruitment post drafts.
//!
//! Every rule is evaluated by a single function, [`evaluate_rules`], which
//! tags each finding with a severity. The same report is consumed twice:
//! after each edit to render advisory warnings, and at submission where the
//! first blocking finding (in rule order) rejects the draft.
//!
//! Blocking rules, in order:
//!
//! 1. Title, content and region are non-empty after trimming
//! 2. Game date and game time are both present
//! 3. The game slot resolves to an instant strictly after "now"
//! 4. At least one person is being recruited
//! 5. Team-to-individual mercenary posts name the recruiting team

use crate::draft::PostDraft;
use crate::error::DomainError;
use crate::schedule::{format_game_date, format_game_time, resolve_game_instant};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Titles longer than this many characters get an advisory warning.
pub const TITLE_ADVISORY_MAX_CHARS: usize = 50;

/// Non-empty bodies shorter than this many characters get an advisory warning.
pub const CONTENT_ADVISORY_MIN_CHARS: usize = 10;

/// Games starting within this many minutes get an advisory warning.
pub const STARTS_SOON_MINUTES: i64 = 120;

/// Head counts above this get an advisory warning.
pub const LARGE_SQUAD_TOTAL: u32 = 30;

/// A form field a finding is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Post title.
    Title,
    /// Post body.
    Content,
    /// Region.
    Region,
    /// Game date.
    GameDate,
    /// Game time.
    GameTime,
    /// Personnel counters.
    Personnel,
    /// Recruiting team name.
    TeamName,
}

impl Field {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Region => "region",
            Self::GameDate => "gameDate",
            Self::GameTime => "gameTime",
            Self::Personnel => "positionCounts",
            Self::TeamName => "teamName",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a finding affects submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Shown inline; never prevents submission.
    Warn,
    /// Prevents submission.
    Block,
}

/// A non-blocking observation about a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The title is longer than recommended.
    TitleTooLong {
        /// Title length in characters.
        length: usize,
    },
    /// The body is shorter than recommended.
    ContentTooShort {
        /// Body length in characters.
        length: usize,
    },
    /// The game starts shortly.
    StartsSoon {
        /// Minutes until kick-off.
        minutes: i64,
    },
    /// An unusually large number of people is being recruited.
    LargeSquad {
        /// Total head count.
        total: u32,
    },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooLong { length } => write!(
                f,
                "제목이 너무 깁니다 ({length}자). {TITLE_ADVISORY_MAX_CHARS}자 이내를 권장합니다."
            ),
            Self::ContentTooShort { length } => write!(
                f,
                "내용이 짧습니다 ({length}자). 연령대, 실력 수준 등 자세한 정보를 적어주세요."
            ),
            Self::StartsSoon { minutes } => {
                write!(f, "경기 시작까지 {minutes}분 남았습니다.")
            }
            Self::LargeSquad { total } => {
                write!(f, "모집 인원이 많습니다 ({total}명). 인원을 다시 확인해주세요.")
            }
        }
    }
}

/// What a finding reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// A blocking rule violation.
    Violation(DomainError),
    /// A non-blocking advisory.
    Advisory(Advisory),
}

/// A single rule outcome attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The field the finding is shown next to.
    pub field: Field,
    /// What was found.
    pub kind: FindingKind,
}

impl Finding {
    const fn violation(field: Field, error: DomainError) -> Self {
        Self {
            field,
            kind: FindingKind::Violation(error),
        }
    }

    const fn advisory(field: Field, advisory: Advisory) -> Self {
        Self {
            field,
            kind: FindingKind::Advisory(advisory),
        }
    }

    /// Returns the severity of this finding.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self.kind {
            FindingKind::Violation(_) => Severity::Block,
            FindingKind::Advisory(_) => Severity::Warn,
        }
    }

    /// Returns the human-readable message for this finding.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.kind {
            FindingKind::Violation(err) => err.to_string(),
            FindingKind::Advisory(advisory) => advisory.to_string(),
        }
    }
}

/// Inputs to rule evaluation that do not come from the draft.
///
/// `now` must be read at evaluation time, never cached from when the form
/// was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// The current instant.
    pub now: DateTime<Utc>,
    /// The timezone game slots are entered in.
    pub timezone: Tz,
}

impl ValidationContext {
    /// Creates a new validation context.
    #[must_use]
    pub const fn new(now: DateTime<Utc>, timezone: Tz) -> Self {
        Self { now, timezone }
    }
}

/// All findings for a draft, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// Returns every finding in rule order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns whether no blocking finding was produced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_blocking().is_none()
    }

    /// Returns the first blocking violation in rule order.
    #[must_use]
    pub fn first_blocking(&self) -> Option<&DomainError> {
        self.findings.iter().find_map(|finding| match &finding.kind {
            FindingKind::Violation(err) => Some(err),
            FindingKind::Advisory(_) => None,
        })
    }

    /// Returns the advisory findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity() == Severity::Warn)
    }

    /// Returns the first message of `severity` for each field.
    #[must_use]
    pub fn field_messages(&self, severity: Severity) -> BTreeMap<Field, String> {
        let mut messages: BTreeMap<Field, String> = BTreeMap::new();
        for finding in self.findings.iter().filter(|f| f.severity() == severity) {
            messages
                .entry(finding.field)
                .or_insert_with(|| finding.message());
        }
        messages
    }
}

/// A draft that passed every blocking rule.
///
/// Only [`validate_for_submit`] can construct one, so anything that accepts a
/// `ValidatedDraft` cannot be handed an invalid draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft<'a> {
    draft: &'a PostDraft,
    report: ValidationReport,
}

impl<'a> ValidatedDraft<'a> {
    /// Returns the validated draft.
    #[must_use]
    pub const fn draft(&self) -> &'a PostDraft {
        self.draft
    }

    /// Returns the advisory findings that accompanied the draft.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.report.warnings()
    }
}

/// Evaluates every rule against a draft.
///
/// This function is pure and deterministic for a given context.
///
/// # Arguments
///
/// * `draft` - The draft to evaluate
/// * `context` - The current instant and entry timezone
///
/// # Returns
///
/// A report holding blocking and advisory findings in rule order.
#[must_use]
pub fn evaluate_rules(draft: &PostDraft, context: &ValidationContext) -> ValidationReport {
    let mut findings: Vec<Finding> = Vec::new();

    // Rule: title, content and region are required
    let missing: Vec<Field> = [
        (Field::Title, draft.title.as_str()),
        (Field::Content, draft.content.as_str()),
        (Field::Region, draft.region.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();
    for field in &missing {
        findings.push(Finding::violation(
            *field,
            DomainError::MissingRequiredFields {
                fields: missing.clone(),
            },
        ));
    }

    // Rule: date and time are both required, and the slot must be in the future
    match (draft.game_date, draft.game_time) {
        (Some(date), Some(time)) => {
            match resolve_game_instant(date, time, context.timezone) {
                Ok(kickoff) if kickoff <= context.now => {
                    findings.push(Finding::violation(
                        Field::GameDate,
                        DomainError::ScheduleInPast {
                            scheduled: format!(
                                "{} {}",
                                format_game_date(date),
                                format_game_time(time)
                            ),
                        },
                    ));
                }
                Ok(kickoff) => {
                    let minutes: i64 = (kickoff - context.now).num_minutes();
                    if minutes < STARTS_SOON_MINUTES {
                        findings.push(Finding::advisory(
                            Field::GameTime,
                            Advisory::StartsSoon { minutes },
                        ));
                    }
                }
                Err(err) => findings.push(Finding::violation(Field::GameTime, err)),
            }
        }
        (date, time) => {
            if date.is_none() {
                findings.push(Finding::violation(
                    Field::GameDate,
                    DomainError::MissingSchedule,
                ));
            }
            if time.is_none() {
                findings.push(Finding::violation(
                    Field::GameTime,
                    DomainError::MissingSchedule,
                ));
            }
        }
    }

    // Rule: at least one person must be recruited
    let total: u32 = draft.personnel.total();
    if total == 0 {
        findings.push(Finding::violation(
            Field::Personnel,
            DomainError::NoPersonnelSelected,
        ));
    } else if total > LARGE_SQUAD_TOTAL {
        findings.push(Finding::advisory(
            Field::Personnel,
            Advisory::LargeSquad { total },
        ));
    }

    // Rule: a team recruiting mercenaries must name itself
    if draft.requires_team_name() && draft.team_name.trim().is_empty() {
        findings.push(Finding::violation(
            Field::TeamName,
            DomainError::MissingTeamName,
        ));
    }

    // Advisories on free text
    let title_length: usize = draft.title.trim().chars().count();
    if title_length > TITLE_ADVISORY_MAX_CHARS {
        findings.push(Finding::advisory(
            Field::Title,
            Advisory::TitleTooLong {
                length: title_length,
            },
        ));
    }
    let content_length: usize = draft.content.trim().chars().count();
    if content_length > 0 && content_length < CONTENT_ADVISORY_MIN_CHARS {
        findings.push(Finding::advisory(
            Field::Content,
            Advisory::ContentTooShort {
                length: content_length,
            },
        ));
    }

    ValidationReport { findings }
}

/// Validates a draft for submission.
///
/// `context.now` must be read immediately before calling this function so
/// that a form left open past its game slot is rejected.
///
/// # Arguments
///
/// * `draft` - The draft to validate
/// * `context` - The current instant and entry timezone
///
/// # Returns
///
/// * `Ok(ValidatedDraft)` carrying any advisory findings
/// * `Err(DomainError)` holding the first blocking violation in rule order
///
/// # Errors
///
/// Returns an error if any blocking rule fails.
pub fn validate_for_submit<'a>(
    draft: &'a PostDraft,
    context: &ValidationContext,
) -> Result<ValidatedDraft<'a>, DomainError> {
    let report: ValidationReport = evaluate_rules(draft, context);
    if let Some(err) = report.first_blocking() {
        return Err(err.clone());
    }
    Ok(ValidatedDraft { draft, report })
}
