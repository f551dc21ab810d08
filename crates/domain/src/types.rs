// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The board a recruitment post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitCategory {
    /// A team looking for a one-off player, or a player looking for a team.
    Mercenary,
    /// A team recruiting permanent members.
    Team,
    /// A team looking for an opponent.
    Match,
}

impl RecruitCategory {
    /// Converts this category to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mercenary => "MERCENARY",
            Self::Team => "TEAM",
            Self::Match => "MATCH",
        }
    }
}

impl FromStr for RecruitCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MERCENARY" => Ok(Self::Mercenary),
            "TEAM" => Ok(Self::Team),
            "MATCH" => Ok(Self::Match),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for RecruitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who a post is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitTargetType {
    /// The post looks for individual users.
    #[default]
    User,
    /// The post looks for teams.
    Team,
}

impl RecruitTargetType {
    /// Converts this target type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Team => "TEAM",
        }
    }
}

impl FromStr for RecruitTargetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "TEAM" => Ok(Self::Team),
            _ => Err(DomainError::InvalidTargetType(s.to_string())),
        }
    }
}

/// One side of a recruitment (the poster or the one being sought).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    /// A single player.
    Individual,
    /// A whole team.
    Team,
}

impl ParticipantType {
    /// Converts this participant type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Team => "TEAM",
        }
    }
}

impl FromStr for ParticipantType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(Self::Individual),
            "TEAM" => Ok(Self::Team),
            _ => Err(DomainError::InvalidParticipantType(s.to_string())),
        }
    }
}

/// Lifecycle status of a recruitment post as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitStatus {
    /// Open for applications. New posts are always created in this state.
    #[default]
    Recruiting,
    /// Enough people have been found.
    Completed,
    /// The game is being played.
    InProgress,
    /// The game is over.
    Finished,
    /// The post was withdrawn.
    Cancelled,
}

impl RecruitStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiting => "RECRUITING",
            Self::Completed => "COMPLETED",
            Self::InProgress => "IN_PROGRESS",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for RecruitStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECRUITING" => Ok(Self::Recruiting),
            "COMPLETED" => Ok(Self::Completed),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "FINISHED" => Ok(Self::Finished),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RecruitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a mercenary listing.
///
/// Only meaningful for [`RecruitCategory::Mercenary`]; other categories ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitmentFlow {
    /// A team is looking for individual players. Requires a team name.
    #[default]
    TeamToIndividual,
    /// An individual player is looking for a team.
    IndividualToTeam,
}

impl RecruitmentFlow {
    /// Converts this flow to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TeamToIndividual => "TEAM_TO_INDIVIDUAL",
            Self::IndividualToTeam => "INDIVIDUAL_TO_TEAM",
        }
    }

    /// Infers the flow of an existing post from the side that published it.
    #[must_use]
    pub const fn from_participant(from: ParticipantType) -> Self {
        match from {
            ParticipantType::Individual => Self::IndividualToTeam,
            ParticipantType::Team => Self::TeamToIndividual,
        }
    }
}

impl FromStr for RecruitmentFlow {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "TEAM_TO_INDIVIDUAL" => Ok(Self::TeamToIndividual),
            "INDIVIDUAL_TO_TEAM" => Ok(Self::IndividualToTeam),
            _ => Err(DomainError::InvalidRecruitmentFlow(s.to_string())),
        }
    }
}

impl std::fmt::Display for RecruitmentFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which personnel counters are authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionMode {
    /// A single aggregate head count.
    #[default]
    Simple,
    /// Independent counts per field position.
    Detailed,
}

impl PositionMode {
    /// Converts this mode to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::Detailed => "DETAILED",
        }
    }
}

impl FromStr for PositionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SIMPLE" => Ok(Self::Simple),
            "DETAILED" => Ok(Self::Detailed),
            _ => Err(DomainError::InvalidPositionMode(s.to_string())),
        }
    }
}

/// The authenticated identity a post is written under.
///
/// Supplied by the caller rather than read from ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// The team the author writes on behalf of.
    team_id: i64,
    /// The author's profile identifier.
    writer_profile_id: i64,
}

impl Author {
    /// Creates a new `Author`.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The team the author writes on behalf of
    /// * `writer_profile_id` - The author's profile identifier
    #[must_use]
    pub const fn new(team_id: i64, writer_profile_id: i64) -> Self {
        Self {
            team_id,
            writer_profile_id,
        }
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Returns the writer's profile identifier.
    #[must_use]
    pub const fn writer_profile_id(&self) -> i64 {
        self.writer_profile_id
    }
}
