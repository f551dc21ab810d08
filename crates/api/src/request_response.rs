// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire data transfer objects for the recruitment backend.
//!
//! Requests are serialized with camelCase names and omit absent optional
//! fields. Responses are read defensively: every field may be missing and
//! falls back to a default rather than failing the whole response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sportshub_domain::{ParticipantType, RecruitCategory, RecruitStatus, RecruitTargetType};
use std::str::FromStr;
use tracing::debug;

/// Default page size when listing posts.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Body of `POST /api/recruit/posts`.
///
/// Built only from a validated draft; never edited after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitPostCreationRequestDto {
    /// The author's team.
    pub team_id: i64,
    /// The author's profile.
    pub writer_profile_id: i64,
    /// Trimmed title.
    pub title: String,
    /// Trimmed body.
    pub content: String,
    /// Trimmed region.
    pub region: String,
    /// Trimmed sub-region, absent when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    /// Image URL, absent when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Game date as `YYYY-MM-DD`.
    pub match_date: String,
    /// Game start time as `HH:MM`.
    pub game_time: String,
    /// Board the post is published on.
    pub category: RecruitCategory,
    /// Who the post is looking for.
    pub target_type: RecruitTargetType,
    /// Always `RECRUITING` on creation.
    pub status: RecruitStatus,
    /// Total number of people sought.
    pub required_personnel: u32,
    /// Non-zero counters as `"FW:2, GK:1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_positions: Option<String>,
    /// Age bracket sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    /// Skill level sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    /// Pitch or venue location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_location: Option<String>,
    /// Participation fee in KRW.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
}

/// Body of `PUT /api/recruit/posts/{id}`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitPostUpdateRequestDto {
    /// New owning team. Never set by the edit workflow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// New author. Never set by the edit workflow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer_profile_id: Option<i64>,
    /// Trimmed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Trimmed body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Trimmed region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Trimmed sub-region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Game date as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_date: Option<String>,
    /// Game start time as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_time: Option<String>,
    /// Board the post belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RecruitCategory>,
    /// Who the post is looking for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<RecruitTargetType>,
    /// Lifecycle status. Never set by the edit workflow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecruitStatus>,
    /// Total number of people sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_personnel: Option<u32>,
    /// Non-zero counters as `"FW:2, GK:1"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_positions: Option<String>,
    /// Age bracket sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    /// Skill level sought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
    /// Pitch or venue location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_location: Option<String>,
    /// Participation fee in KRW.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
}

/// Query string of `GET /api/recruit/posts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    /// Board to list.
    pub category: RecruitCategory,
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl ListQuery {
    /// Creates a query for the first page of `category`.
    #[must_use]
    pub const fn first_page(category: RecruitCategory) -> Self {
        Self {
            category,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A recruitment post as read from the backend, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitPost {
    /// Backend identifier; 0 when the backend sent none.
    pub id: i64,
    /// Title, empty when missing.
    pub title: String,
    /// Body, empty when missing.
    pub content: String,
    /// Region, empty when missing.
    pub region: String,
    /// Sub-region.
    pub sub_region: Option<String>,
    /// Image URL, read from `imageUrl` or `thumbnailUrl`.
    pub thumbnail_url: Option<String>,
    /// Board the post belongs to.
    pub category: RecruitCategory,
    /// Who the post is looking for.
    pub target_type: RecruitTargetType,
    /// Side that posted the listing.
    pub from_participant: ParticipantType,
    /// Side the listing is addressed to.
    pub to_participant: ParticipantType,
    /// Game date, read from `matchDate` or `gameDate`.
    pub game_date: Option<String>,
    /// Game start time.
    pub game_time: Option<String>,
    /// Lifecycle status.
    pub status: RecruitStatus,
    /// Total number of people sought.
    pub required_personnel: Option<u32>,
    /// Non-zero counters as `"FW:2, GK:1"`.
    pub preferred_positions: Option<String>,
    /// Age bracket sought.
    pub age_group: Option<String>,
    /// Skill level sought.
    pub skill_level: Option<String>,
    /// Pitch or venue location.
    pub field_location: Option<String>,
    /// Participation fee in KRW.
    pub cost: Option<u32>,
    /// Name of the recruiting team.
    pub team_name: Option<String>,
    /// Author profile, read from `writerProfileId` or `authorId`.
    pub author_id: Option<i64>,
    /// Author display name.
    pub author_name: Option<String>,
    /// Creation timestamp as sent by the backend.
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    pub updated_at: Option<String>,
    /// Number of accepted applications.
    pub accepted_count: u32,
}

type Object = Map<String, Value>;

/// Returns the first of `keys` whose value `read` accepts.
///
/// Earlier keys win. A present but unreadable value is skipped.
fn read_field<T>(object: &Object, keys: &[&str], read: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let mut present: bool = false;
    for key in keys {
        let Some(value) = object.get(*key).filter(|v| !v.is_null()) else {
            continue;
        };
        if let Some(parsed) = read(value) {
            return Some(parsed);
        }
        present = true;
    }
    if present {
        debug!(field = keys.first().copied().unwrap_or_default(), "Ignoring unreadable field");
    }
    None
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an integer sent as a number, a whole float or a numeric string.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract().abs() < f64::EPSILON)
                .and_then(|f| format!("{f:.0}").parse().ok())
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count(value: &Value) -> Option<u32> {
    integer(value).and_then(|n| u32::try_from(n).ok())
}

fn numbers(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(Value::as_i64).collect()
}

/// Reads a date or date-time sent as a string or as a `[y, m, d, h, min, s]`
/// array.
fn timestamp(value: &Value) -> Option<String> {
    if let Value::String(s) = value {
        return Some(s.clone());
    }
    match numbers(value)?.as_slice() {
        [y, mo, d] => Some(format!("{y:04}-{mo:02}-{d:02}")),
        [y, mo, d, h, mi] => Some(format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:00")),
        [y, mo, d, h, mi, sec, ..] => {
            Some(format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{sec:02}"))
        }
        _ => None,
    }
}

/// Reads a time of day sent as a string or as an `[h, min, s]` array.
fn time_of_day(value: &Value) -> Option<String> {
    if let Value::String(s) = value {
        return Some(s.clone());
    }
    match numbers(value)?.as_slice() {
        [h, mi] => Some(format!("{h:02}:{mi:02}:00")),
        [h, mi, sec, ..] => Some(format!("{h:02}:{mi:02}:{sec:02}")),
        _ => None,
    }
}

fn parse_or<T: FromStr + Copy>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl RecruitPost {
    /// Reads a post from a JSON value.
    ///
    /// Each field is read on its own; a missing or unreadable field takes
    /// its default without affecting the others. When `category` is given it
    /// overrides the backend's category, as the list endpoint is always
    /// queried per category.
    ///
    /// # Returns
    ///
    /// `None` if `value` is not a JSON object.
    #[must_use]
    pub fn from_value(value: &Value, category: Option<RecruitCategory>) -> Option<Self> {
        let object: &Object = value.as_object()?;
        let text_of = |keys: &[&str]| read_field(object, keys, text);

        Some(Self {
            id: read_field(object, &["id"], integer).unwrap_or(0),
            title: text_of(&["title"]).unwrap_or_default(),
            content: text_of(&["content"]).unwrap_or_default(),
            region: text_of(&["region"]).unwrap_or_default(),
            sub_region: text_of(&["subRegion"]),
            thumbnail_url: text_of(&["imageUrl", "thumbnailUrl"]),
            category: category.unwrap_or_else(|| {
                parse_or(text_of(&["category"]), RecruitCategory::Mercenary)
            }),
            target_type: parse_or(text_of(&["targetType"]), RecruitTargetType::User),
            from_participant: parse_or(text_of(&["fromParticipant"]), ParticipantType::Individual),
            to_participant: parse_or(text_of(&["toParticipant"]), ParticipantType::Team),
            game_date: read_field(object, &["matchDate", "gameDate"], timestamp),
            game_time: read_field(object, &["gameTime"], time_of_day),
            status: parse_or(text_of(&["status"]), RecruitStatus::Recruiting),
            required_personnel: read_field(object, &["requiredPersonnel"], count),
            preferred_positions: text_of(&["preferredPositions"]),
            age_group: text_of(&["ageGroup"]),
            skill_level: text_of(&["skillLevel"]),
            field_location: text_of(&["fieldLocation"]),
            cost: read_field(object, &["cost"], count),
            team_name: text_of(&["teamName"]),
            author_id: read_field(object, &["writerProfileId", "authorId"], integer),
            author_name: text_of(&["authorName"]),
            created_at: read_field(object, &["createdAt"], timestamp),
            updated_at: read_field(object, &["updatedAt"], timestamp),
            accepted_count: read_field(object, &["acceptedCount"], count).unwrap_or(0),
        })
    }

    /// Returns whether the title, region or content contains `needle`.
    ///
    /// `needle` must already be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        [&self.title, &self.region, &self.content]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Returns the items of a bare array or of a page object's `content` array.
fn list_items(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

/// Reads a list response.
///
/// The backend returns either a bare array or a page object with a
/// `content` array. Any other shape yields an empty list. Items that are
/// not JSON objects are skipped; every object is kept.
#[must_use]
pub fn normalize_post_list(value: &Value, category: RecruitCategory) -> Vec<RecruitPost> {
    list_items(value)
        .iter()
        .filter_map(|item| RecruitPost::from_value(item, Some(category)))
        .collect()
}

/// Keeps the posts whose title, region or content contains `search`,
/// ignoring case.
///
/// A blank `search` keeps every post. Order is preserved.
#[must_use]
pub fn filter_posts(posts: Vec<RecruitPost>, search: &str) -> Vec<RecruitPost> {
    let needle: String = search.trim().to_lowercase();
    if needle.is_empty() {
        return posts;
    }
    posts
        .into_iter()
        .filter(|post| post.mentions(&needle))
        .collect()
}

/// Counts the posts still recruiting.
#[must_use]
pub fn count_recruiting(posts: &[RecruitPost]) -> usize {
    posts
        .iter()
        .filter(|post| post.status == RecruitStatus::Recruiting)
        .count()
}

/// Body of `POST /api/recruit/posts/{id}/applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    /// The applying profile.
    pub applicant_profile_id: i64,
    /// Note to the post's author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Awaiting the author's decision.
    #[default]
    Pending,
    /// Accepted by the author.
    Accepted,
    /// Rejected by the author.
    Rejected,
}

impl ApplicationStatus {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }

    fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "ACCEPTED" => Some(Self::Accepted),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An author's decision on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationDecision {
    /// Admit the applicant.
    Accept,
    /// Turn the applicant down.
    Reject,
}

impl ApplicationDecision {
    /// Returns the status the application moves to.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        match self {
            Self::Accept => ApplicationStatus::Accepted,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }

    /// Returns the message shown once the decision is recorded.
    #[must_use]
    pub const fn confirmation(&self) -> &'static str {
        match self {
            Self::Accept => "신청을 승인했습니다.",
            Self::Reject => "신청을 거절했습니다.",
        }
    }
}

/// Body of `PATCH /api/recruit/posts/{id}/applications/{applicationId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStatusRequest {
    /// The new status.
    pub status: ApplicationStatus,
}

/// An application as returned by the backend, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    /// Backend identifier; 0 when the backend sent none.
    pub id: i64,
    /// The post applied to.
    pub post_id: i64,
    /// The applying profile.
    pub applicant_profile_id: i64,
    /// Note to the author, read from `message` or `description`.
    pub message: Option<String>,
    /// Review status; unknown values read as pending.
    pub status: ApplicationStatus,
    /// When the application was made, read from `applicationDate` or
    /// `appliedAt`.
    pub application_date: Option<String>,
}

impl ApplicationRecord {
    /// Reads an application from a JSON value, field by field.
    ///
    /// # Returns
    ///
    /// `None` if `value` is not a JSON object.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let object: &Object = value.as_object()?;
        Some(Self {
            id: read_field(object, &["id"], integer).unwrap_or(0),
            post_id: read_field(object, &["postId"], integer).unwrap_or(0),
            applicant_profile_id: read_field(object, &["applicantProfileId"], integer)
                .unwrap_or(0),
            message: read_field(object, &["message", "description"], text),
            status: read_field(object, &["status"], |v| {
                v.as_str().and_then(ApplicationStatus::from_wire)
            })
            .unwrap_or_default(),
            application_date: read_field(object, &["applicationDate", "appliedAt"], timestamp),
        })
    }

    /// Reads an application response.
    ///
    /// Missing identifiers are filled from the request that produced it.
    #[must_use]
    pub fn from_response(value: &Value, post_id: i64, request: &ApplicationRequest) -> Self {
        let mut record: Self = Self::from_value(value).unwrap_or_default();
        if record.post_id == 0 {
            record.post_id = post_id;
        }
        if record.applicant_profile_id == 0 {
            record.applicant_profile_id = request.applicant_profile_id;
        }
        if record.message.is_none() {
            record.message.clone_from(&request.message);
        }
        record
    }
}

/// Reads an application list response, a bare array or a page object.
#[must_use]
pub fn normalize_application_list(value: &Value) -> Vec<ApplicationRecord> {
    list_items(value)
        .iter()
        .filter_map(ApplicationRecord::from_value)
        .collect()
}
