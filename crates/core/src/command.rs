// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sportshub_domain::{PostDetails, Position, PositionMode, RecruitmentFlow};
use time::{Date, Time};

/// A single edit to a post draft, expressed as data only.
///
/// Commands are the only way the composition session changes a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the title.
    SetTitle(String),
    /// Replace the body.
    SetContent(String),
    /// Replace the region.
    SetRegion(String),
    /// Replace the sub-region.
    SetSubRegion(String),
    /// Select or clear the game date.
    SetGameDate(Option<Date>),
    /// Select or clear the game start time.
    SetGameTime(Option<Time>),
    /// Step a personnel counter.
    AdjustPersonnel {
        /// The counter to step.
        position: Position,
        /// Signed change.
        delta: i32,
    },
    /// Switch between simple and detailed personnel entry.
    SwitchPositionMode(PositionMode),
    /// Change the direction of a mercenary listing.
    SetRecruitmentFlow(RecruitmentFlow),
    /// Replace the recruiting team's name.
    SetTeamName(String),
    /// Replace the optional details.
    SetDetails(PostDetails),
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetTitle(_) => "SetTitle",
            Self::SetContent(_) => "SetContent",
            Self::SetRegion(_) => "SetRegion",
            Self::SetSubRegion(_) => "SetSubRegion",
            Self::SetGameDate(_) => "SetGameDate",
            Self::SetGameTime(_) => "SetGameTime",
            Self::AdjustPersonnel { .. } => "AdjustPersonnel",
            Self::SwitchPositionMode(_) => "SwitchPositionMode",
            Self::SetRecruitmentFlow(_) => "SetRecruitmentFlow",
            Self::SetTeamName(_) => "SetTeamName",
            Self::SetDetails(_) => "SetDetails",
        }
    }
}
