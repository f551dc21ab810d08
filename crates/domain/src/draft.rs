// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::personnel::PersonnelSelection;
use crate::types::{PositionMode, RecruitCategory, RecruitmentFlow};
use time::{Date, Time};

/// Optional details a post may carry beyond the required fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDetails {
    /// Image shown on the post card.
    pub image_url: String,
    /// Pitch or venue location.
    pub field_location: String,
    /// Age bracket of the players sought, e.g. "20-30대".
    pub age_group: String,
    /// Skill level of the players sought, e.g. "중급".
    pub skill_level: String,
    /// Participation fee in KRW.
    pub cost: Option<u32>,
}

/// The in-progress state of a recruitment post form.
///
/// A draft is owned by a single composition session and discarded when the
/// session ends. It may be invalid at any point; validity is only asserted
/// at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// The board the post will be published on. Fixed for the session.
    pub category: RecruitCategory,
    /// Post title. Required.
    pub title: String,
    /// Post body. Required.
    pub content: String,
    /// Region, e.g. "서울". Required.
    pub region: String,
    /// Sub-region, e.g. "강남구". Optional.
    pub sub_region: String,
    /// Calendar date of the game.
    pub game_date: Option<Date>,
    /// Wall-clock start time of the game.
    pub game_time: Option<Time>,
    /// The people being recruited.
    pub personnel: PersonnelSelection,
    /// Direction of a mercenary listing.
    pub recruitment_flow: RecruitmentFlow,
    /// Name of the recruiting team.
    pub team_name: String,
    /// Optional extras.
    pub details: PostDetails,
}

impl PostDraft {
    /// Creates an empty draft for `category`.
    ///
    /// The draft starts in simple position mode with a team-to-individual flow.
    #[must_use]
    pub fn new(category: RecruitCategory) -> Self {
        Self {
            category,
            title: String::new(),
            content: String::new(),
            region: String::new(),
            sub_region: String::new(),
            game_date: None,
            game_time: None,
            personnel: PersonnelSelection::empty(PositionMode::Simple),
            recruitment_flow: RecruitmentFlow::default(),
            team_name: String::new(),
            details: PostDetails::default(),
        }
    }

    /// Returns whether the team name is required for this draft.
    #[must_use]
    pub fn requires_team_name(&self) -> bool {
        self.category == RecruitCategory::Mercenary
            && self.recruitment_flow == RecruitmentFlow::TeamToIndividual
    }
}
