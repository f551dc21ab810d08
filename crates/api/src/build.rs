// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between drafts and wire requests.

use crate::request_response::{
    RecruitPost, RecruitPostCreationRequestDto, RecruitPostUpdateRequestDto,
};
use sportshub_domain::{
    AGGREGATE_COUNT_MAX, Author, DomainError, PersonnelSelection, PostDetails, PostDraft,
    RecruitCategory, RecruitStatus, RecruitTargetType, RecruitmentFlow, ValidatedDraft,
    format_game_date, format_game_time, parse_game_date, parse_game_time,
};

/// Returns who a post is looking for.
///
/// Mercenary posts follow their flow; team posts look for players and match
/// posts look for opposing teams.
#[must_use]
pub const fn target_type_for(
    category: RecruitCategory,
    flow: RecruitmentFlow,
) -> RecruitTargetType {
    match (category, flow) {
        (RecruitCategory::Mercenary, RecruitmentFlow::TeamToIndividual)
        | (RecruitCategory::Team, _) => RecruitTargetType::User,
        (RecruitCategory::Mercenary, RecruitmentFlow::IndividualToTeam)
        | (RecruitCategory::Match, _) => RecruitTargetType::Team,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builds the creation request for a validated draft.
///
/// # Arguments
///
/// * `validated` - A draft that passed every blocking rule
/// * `author` - The signed-in author
///
/// # Returns
///
/// A request whose `requiredPersonnel` equals the draft's personnel total.
#[must_use]
pub fn build_creation_request(
    validated: &ValidatedDraft<'_>,
    author: Author,
) -> RecruitPostCreationRequestDto {
    let draft: &PostDraft = validated.draft();
    let details: &PostDetails = &draft.details;

    RecruitPostCreationRequestDto {
        team_id: author.team_id(),
        writer_profile_id: author.writer_profile_id(),
        title: draft.title.trim().to_string(),
        content: draft.content.trim().to_string(),
        region: draft.region.trim().to_string(),
        sub_region: non_empty(&draft.sub_region),
        image_url: non_empty(&details.image_url),
        // Both are present on a validated draft
        match_date: draft.game_date.map(format_game_date).unwrap_or_default(),
        game_time: draft.game_time.map(format_game_time).unwrap_or_default(),
        category: draft.category,
        target_type: target_type_for(draft.category, draft.recruitment_flow),
        status: RecruitStatus::Recruiting,
        required_personnel: draft.personnel.total(),
        preferred_positions: draft.personnel.preferred_positions(),
        age_group: non_empty(&details.age_group),
        skill_level: non_empty(&details.skill_level),
        field_location: non_empty(&details.field_location),
        cost: details.cost,
    }
}

/// Builds the update request for a validated draft.
///
/// Ownership and status are left untouched.
#[must_use]
pub fn build_update_request(validated: &ValidatedDraft<'_>) -> RecruitPostUpdateRequestDto {
    let draft: &PostDraft = validated.draft();
    let details: &PostDetails = &draft.details;

    RecruitPostUpdateRequestDto {
        title: Some(draft.title.trim().to_string()),
        content: Some(draft.content.trim().to_string()),
        region: Some(draft.region.trim().to_string()),
        sub_region: non_empty(&draft.sub_region),
        image_url: non_empty(&details.image_url),
        match_date: draft.game_date.map(format_game_date),
        game_time: draft.game_time.map(format_game_time),
        category: Some(draft.category),
        target_type: Some(target_type_for(draft.category, draft.recruitment_flow)),
        required_personnel: Some(draft.personnel.total()),
        preferred_positions: draft.personnel.preferred_positions(),
        age_group: non_empty(&details.age_group),
        skill_level: non_empty(&details.skill_level),
        field_location: non_empty(&details.field_location),
        cost: details.cost,
        ..RecruitPostUpdateRequestDto::default()
    }
}

/// Pre-populates a draft for editing an existing post.
///
/// The game date is truncated to its first ten characters and the flow is
/// derived from the post's `fromParticipant`. A post without preferred
/// positions but with a head count is read as a simple selection.
///
/// # Errors
///
/// Returns an error if the stored date, time or preferred positions cannot
/// be parsed.
pub fn draft_from_post(post: &RecruitPost) -> Result<PostDraft, DomainError> {
    let mut draft: PostDraft = PostDraft::new(post.category);
    draft.title.clone_from(&post.title);
    draft.content.clone_from(&post.content);
    draft.region.clone_from(&post.region);
    draft.sub_region = post.sub_region.clone().unwrap_or_default();
    draft.game_date = post
        .game_date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(parse_game_date)
        .transpose()?;
    draft.game_time = post
        .game_time
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(parse_game_time)
        .transpose()?;
    draft.recruitment_flow = RecruitmentFlow::from_participant(post.from_participant);
    draft.team_name = post.team_name.clone().unwrap_or_default();

    draft.personnel = match post.preferred_positions.as_deref() {
        Some(positions) if !positions.trim().is_empty() => {
            PersonnelSelection::parse_preferred_positions(positions)?
        }
        _ => {
            let all: u8 = post
                .required_personnel
                .unwrap_or(0)
                .min(u32::from(AGGREGATE_COUNT_MAX))
                .try_into()
                .unwrap_or(AGGREGATE_COUNT_MAX);
            PersonnelSelection::Simple { all }
        }
    };

    draft.details = PostDetails {
        image_url: post.thumbnail_url.clone().unwrap_or_default(),
        field_location: post.field_location.clone().unwrap_or_default(),
        age_group: post.age_group.clone().unwrap_or_default(),
        skill_level: post.skill_level.clone().unwrap_or_default(),
        cost: post.cost,
    };

    Ok(draft)
}
