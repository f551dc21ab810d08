// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use sportshub_domain::{
    PostDraft, RecruitCategory, ValidationContext, ValidationReport, evaluate_rules,
};
use tracing::debug;

/// The result of a successful draft edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The draft after the edit.
    pub new_draft: PostDraft,
    /// Rule findings for the new draft, for inline display.
    pub report: ValidationReport,
}

/// Applies an edit command to a draft, producing a new draft.
///
/// The input draft is never modified. Findings are re-evaluated against
/// `context` so that advisories track every edit; blocking findings in the
/// report do not make the edit fail.
///
/// # Arguments
///
/// * `draft` - The current draft (immutable)
/// * `command` - The edit to apply
/// * `context` - The current instant and entry timezone
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new draft and its findings
/// * `Err(CoreError)` if the edit cannot apply to this draft
///
/// # Errors
///
/// Returns an error if the recruitment flow is changed on a draft whose
/// category is not `MERCENARY`.
pub fn apply(
    draft: &PostDraft,
    command: Command,
    context: &ValidationContext,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut new_draft: PostDraft = draft.clone();

    match command {
        Command::SetTitle(title) => new_draft.title = title,
        Command::SetContent(content) => new_draft.content = content,
        Command::SetRegion(region) => new_draft.region = region,
        Command::SetSubRegion(sub_region) => new_draft.sub_region = sub_region,
        Command::SetGameDate(date) => new_draft.game_date = date,
        Command::SetGameTime(time) => new_draft.game_time = time,
        Command::AdjustPersonnel { position, delta } => {
            if !new_draft.personnel.adjust(position, delta) {
                debug!(
                    position = %position,
                    mode = new_draft.personnel.mode().as_str(),
                    "Ignoring adjustment outside active position mode"
                );
            }
        }
        Command::SwitchPositionMode(mode) => new_draft.personnel.switch_mode(mode),
        Command::SetRecruitmentFlow(flow) => {
            if draft.category != RecruitCategory::Mercenary {
                return Err(CoreError::FlowNotApplicable {
                    category: draft.category.to_string(),
                });
            }
            new_draft.recruitment_flow = flow;
        }
        Command::SetTeamName(team_name) => new_draft.team_name = team_name,
        Command::SetDetails(details) => new_draft.details = details,
    }

    let report: ValidationReport = evaluate_rules(&new_draft, context);
    debug!(
        command = name,
        findings = report.findings().len(),
        valid = report.is_valid(),
        "Applied draft edit"
    );

    Ok(TransitionResult { new_draft, report })
}
