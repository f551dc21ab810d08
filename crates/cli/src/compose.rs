// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns command line flags into draft edits.

use clap::Args;
use sportshub_domain::{
    DomainError, Field, Position, PositionMode, PostDetails, PostDraft, RecruitmentFlow,
    Severity, ValidationContext, ValidationReport, evaluate_rules, parse_game_date,
    parse_game_time,
};
use sportshub_recruit::{Command, CoreError, TransitionResult, apply};
use std::collections::BTreeMap;

/// Post fields settable from the command line. Omitted flags leave the
/// draft unchanged.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftArgs {
    /// Post title
    #[arg(long)]
    pub title: Option<String>,

    /// Post body
    #[arg(long)]
    pub content: Option<String>,

    /// Region, e.g. 서울
    #[arg(long)]
    pub region: Option<String>,

    /// Sub-region, e.g. 강남구
    #[arg(long)]
    pub sub_region: Option<String>,

    /// Game date as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Game start time as HH:MM
    #[arg(long)]
    pub time: Option<String>,

    /// Head count without positions (simple mode)
    #[arg(long, conflicts_with_all = ["fw", "mf", "df", "gk"])]
    pub all: Option<u8>,

    /// Forwards wanted (detailed mode)
    #[arg(long)]
    pub fw: Option<u8>,

    /// Midfielders wanted (detailed mode)
    #[arg(long)]
    pub mf: Option<u8>,

    /// Defenders wanted (detailed mode)
    #[arg(long)]
    pub df: Option<u8>,

    /// Goalkeepers wanted (detailed mode)
    #[arg(long)]
    pub gk: Option<u8>,

    /// Mercenary direction: team-to-individual or individual-to-team
    #[arg(long)]
    pub flow: Option<RecruitmentFlow>,

    /// Name of the recruiting team
    #[arg(long)]
    pub team_name: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Pitch or venue location
    #[arg(long)]
    pub field_location: Option<String>,

    /// Age bracket, e.g. 20-30대
    #[arg(long)]
    pub age_group: Option<String>,

    /// Skill level, e.g. 중급
    #[arg(long)]
    pub skill_level: Option<String>,

    /// Participation fee in KRW
    #[arg(long)]
    pub cost: Option<u32>,
}

impl DraftArgs {
    fn has_details(&self) -> bool {
        self.image_url.is_some()
            || self.field_location.is_some()
            || self.age_group.is_some()
            || self.skill_level.is_some()
            || self.cost.is_some()
    }

    /// Returns the edits these flags describe, in form order.
    ///
    /// Giving any field position switches the draft to detailed mode;
    /// giving `--all` switches it to simple mode. Either resets all counters
    /// before the new counts are applied. Detail flags are merged over
    /// `current`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or time cannot be parsed.
    pub fn commands(&self, current: &PostDetails) -> Result<Vec<Command>, DomainError> {
        let mut commands: Vec<Command> = Vec::new();

        let text: [(&Option<String>, fn(String) -> Command); 4] = [
            (&self.title, Command::SetTitle),
            (&self.content, Command::SetContent),
            (&self.region, Command::SetRegion),
            (&self.sub_region, Command::SetSubRegion),
        ];
        for (value, command) in text {
            if let Some(value) = value {
                commands.push(command(value.clone()));
            }
        }

        if let Some(date) = &self.date {
            commands.push(Command::SetGameDate(Some(parse_game_date(date)?)));
        }
        if let Some(time) = &self.time {
            commands.push(Command::SetGameTime(Some(parse_game_time(time)?)));
        }

        let positions: Vec<(Position, u8)> = [
            (Position::Fw, self.fw),
            (Position::Mf, self.mf),
            (Position::Df, self.df),
            (Position::Gk, self.gk),
        ]
        .into_iter()
        .filter_map(|(position, count)| count.map(|c| (position, c)))
        .collect();

        if !positions.is_empty() {
            commands.push(Command::SwitchPositionMode(PositionMode::Detailed));
            for (position, count) in positions {
                commands.push(Command::AdjustPersonnel {
                    position,
                    delta: i32::from(count),
                });
            }
        } else if let Some(all) = self.all {
            commands.push(Command::SwitchPositionMode(PositionMode::Simple));
            commands.push(Command::AdjustPersonnel {
                position: Position::All,
                delta: i32::from(all),
            });
        }

        if let Some(flow) = self.flow {
            commands.push(Command::SetRecruitmentFlow(flow));
        }
        if let Some(team_name) = &self.team_name {
            commands.push(Command::SetTeamName(team_name.clone()));
        }

        if self.has_details() {
            let details: PostDetails = PostDetails {
                image_url: self.image_url.clone().unwrap_or_else(|| current.image_url.clone()),
                field_location: self
                    .field_location
                    .clone()
                    .unwrap_or_else(|| current.field_location.clone()),
                age_group: self.age_group.clone().unwrap_or_else(|| current.age_group.clone()),
                skill_level: self
                    .skill_level
                    .clone()
                    .unwrap_or_else(|| current.skill_level.clone()),
                cost: self.cost.or(current.cost),
            };
            commands.push(Command::SetDetails(details));
        }

        Ok(commands)
    }
}

/// Applies `commands` to `draft` in order.
///
/// # Errors
///
/// Returns an error if an edit does not apply to the draft.
pub fn compose(
    draft: PostDraft,
    commands: Vec<Command>,
    context: &ValidationContext,
) -> Result<TransitionResult, CoreError> {
    let report: ValidationReport = evaluate_rules(&draft, context);
    commands.into_iter().try_fold(
        TransitionResult {
            new_draft: draft,
            report,
        },
        |result, command| apply(&result.new_draft, command, context),
    )
}

/// Renders findings as `severity field: message` lines.
#[must_use]
pub fn render_findings(report: &ValidationReport) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for (severity, label) in [(Severity::Block, "error"), (Severity::Warn, "warning")] {
        let messages: BTreeMap<Field, String> = report.field_messages(severity);
        lines.extend(
            messages
                .into_iter()
                .map(|(field, message)| format!("{label} {field}: {message}")),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono_tz::Asia::Seoul;
    use sportshub_domain::RecruitCategory;
    use sportshub_recruit::{FixedClock, validation_context};

    fn create_test_context() -> ValidationContext {
        // 2026-10-19T03:00:00Z, noon in Seoul
        let now = sportshub_domain::resolve_game_instant(
            time::macros::date!(2026 - 10 - 19),
            time::macros::time!(12:00),
            Seoul,
        )
        .unwrap();
        validation_context(&FixedClock(now), Seoul)
    }

    fn create_complete_args() -> DraftArgs {
        DraftArgs {
            title: Some(String::from("토요일 용병 구합니다")),
            content: Some(String::from("잠실에서 저녁 8시 경기, 매너 좋은 분 환영")),
            region: Some(String::from("서울")),
            date: Some(String::from("2026-10-24")),
            time: Some(String::from("20:00")),
            fw: Some(2),
            gk: Some(1),
            team_name: Some(String::from("잠실 FC")),
            ..DraftArgs::default()
        }
    }

    #[test]
    fn test_complete_args_compose_valid_draft() {
        let commands: Vec<Command> = create_complete_args()
            .commands(&PostDetails::default())
            .unwrap();
        let result: TransitionResult = compose(
            PostDraft::new(RecruitCategory::Mercenary),
            commands,
            &create_test_context(),
        )
        .unwrap();
        assert!(result.report.is_valid());
        assert_eq!(
            result.new_draft.personnel.preferred_positions().as_deref(),
            Some("FW:2, GK:1")
        );
    }

    #[test]
    fn test_no_flags_produce_no_commands() {
        let commands: Vec<Command> = DraftArgs::default()
            .commands(&PostDetails::default())
            .unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let args: DraftArgs = DraftArgs {
            date: Some(String::from("10/24")),
            ..DraftArgs::default()
        };
        assert!(matches!(
            args.commands(&PostDetails::default()),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_detail_flags_merge_over_current() {
        let current: PostDetails = PostDetails {
            field_location: String::from("잠실 보조구장"),
            cost: Some(5000),
            ..PostDetails::default()
        };
        let args: DraftArgs = DraftArgs {
            cost: Some(7000),
            ..DraftArgs::default()
        };
        let commands: Vec<Command> = args.commands(&current).unwrap();
        assert_eq!(
            commands,
            vec![Command::SetDetails(PostDetails {
                field_location: String::from("잠실 보조구장"),
                cost: Some(7000),
                ..PostDetails::default()
            })]
        );
    }

    #[test]
    fn test_render_findings_lists_errors_first() {
        let report: ValidationReport = evaluate_rules(
            &PostDraft::new(RecruitCategory::Team),
            &create_test_context(),
        );
        let lines: Vec<String> = render_findings(&report);
        assert_eq!(
            lines.first().map(String::as_str),
            Some("error title: 제목, 내용, 지역은 필수 입력 항목입니다.")
        );
    }
}
