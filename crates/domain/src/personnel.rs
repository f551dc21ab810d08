// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Personnel allocation for recruitment posts.
//!
//! A post asks for people either as a single head count (simple mode) or
//! as independent counts per field position (detailed mode). The two
//! representations are mutually exclusive and are modelled as a tagged
//! variant, so a selection with both an aggregate and per-position counts
//! cannot be constructed.
//!
//! ## Invariants
//!
//! - Field position counters stay within `[0, 20]`
//! - The aggregate counter stays within `[0, 99]`
//! - Switching mode always resets every counter to zero
//! - Out-of-range adjustments saturate at the bound; they are never rejected

use crate::error::DomainError;
use crate::types::PositionMode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper bound for a single field position counter.
pub const POSITION_COUNT_MAX: u8 = 20;

/// Upper bound for the aggregate head count.
pub const AGGREGATE_COUNT_MAX: u8 = 99;

/// A position tag used when recruiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    /// Forward.
    Fw,
    /// Midfielder.
    Mf,
    /// Defender.
    Df,
    /// Goalkeeper.
    Gk,
    /// Position-agnostic aggregate.
    All,
}

impl Position {
    /// Every tag in serialization order.
    pub const ORDER: [Self; 5] = [Self::Fw, Self::Mf, Self::Df, Self::Gk, Self::All];

    /// Returns the tag as written on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fw => "FW",
            Self::Mf => "MF",
            Self::Df => "DF",
            Self::Gk => "GK",
            Self::All => "ALL",
        }
    }

    /// Returns the inclusive upper bound of this tag's counter.
    #[must_use]
    pub const fn bound(&self) -> u8 {
        match self {
            Self::All => AGGREGATE_COUNT_MAX,
            Self::Fw | Self::Mf | Self::Df | Self::Gk => POSITION_COUNT_MAX,
        }
    }

    /// Returns the mode in which this tag's counter may be adjusted.
    #[must_use]
    pub const fn mode(&self) -> PositionMode {
        match self {
            Self::All => PositionMode::Simple,
            Self::Fw | Self::Mf | Self::Df | Self::Gk => PositionMode::Detailed,
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FW" => Ok(Self::Fw),
            "MF" => Ok(Self::Mf),
            "DF" => Ok(Self::Df),
            "GK" => Ok(Self::Gk),
            "ALL" => Ok(Self::All),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-position counts used in detailed mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PositionCounts {
    fw: u8,
    mf: u8,
    df: u8,
    gk: u8,
}

impl PositionCounts {
    /// Returns the count for a field position. `All` is always zero here.
    #[must_use]
    pub const fn get(&self, position: Position) -> u8 {
        match position {
            Position::Fw => self.fw,
            Position::Mf => self.mf,
            Position::Df => self.df,
            Position::Gk => self.gk,
            Position::All => 0,
        }
    }

    const fn slot(&mut self, position: Position) -> Option<&mut u8> {
        match position {
            Position::Fw => Some(&mut self.fw),
            Position::Mf => Some(&mut self.mf),
            Position::Df => Some(&mut self.df),
            Position::Gk => Some(&mut self.gk),
            Position::All => None,
        }
    }
}

/// The people a post is recruiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonnelSelection {
    /// A single aggregate head count.
    Simple {
        /// The aggregate (`ALL`) count.
        all: u8,
    },
    /// Independent counts per field position.
    Detailed(PositionCounts),
}

impl Default for PersonnelSelection {
    fn default() -> Self {
        Self::empty(PositionMode::Simple)
    }
}

impl PersonnelSelection {
    /// Creates a selection in the given mode with every counter at zero.
    #[must_use]
    pub const fn empty(mode: PositionMode) -> Self {
        match mode {
            PositionMode::Simple => Self::Simple { all: 0 },
            PositionMode::Detailed => Self::Detailed(PositionCounts {
                fw: 0,
                mf: 0,
                df: 0,
                gk: 0,
            }),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> PositionMode {
        match self {
            Self::Simple { .. } => PositionMode::Simple,
            Self::Detailed(_) => PositionMode::Detailed,
        }
    }

    /// Switches to `mode`, resetting every counter to zero.
    ///
    /// The reset happens even when `mode` is already active.
    pub const fn switch_mode(&mut self, mode: PositionMode) {
        *self = Self::empty(mode);
    }

    /// Adjusts the counter for `position` by `delta`, saturating at its bound.
    ///
    /// Only the counters of the active mode can be adjusted: `All` in simple
    /// mode, field positions in detailed mode. Adjusting a tag that belongs to
    /// the other mode has no effect.
    ///
    /// # Arguments
    ///
    /// * `position` - The counter to adjust
    /// * `delta` - The signed change; any magnitude is accepted
    ///
    /// # Returns
    ///
    /// `true` if `position` belongs to the active mode (even if the counter
    /// was already at its bound), `false` otherwise.
    pub fn adjust(&mut self, position: Position, delta: i32) -> bool {
        match (self, position) {
            (Self::Simple { all }, Position::All) => {
                *all = saturating_adjust(*all, delta, position.bound());
                true
            }
            (Self::Detailed(counts), _) => counts.slot(position).is_some_and(|slot| {
                *slot = saturating_adjust(*slot, delta, position.bound());
                true
            }),
            (Self::Simple { .. }, _) => false,
        }
    }

    /// Returns the current count for `position`.
    #[must_use]
    pub const fn count(&self, position: Position) -> u8 {
        match (self, position) {
            (Self::Simple { all }, Position::All) => *all,
            (Self::Simple { .. }, _) => 0,
            (Self::Detailed(counts), _) => counts.get(position),
        }
    }

    /// Returns the number of people being recruited across all five counters.
    #[must_use]
    pub fn total(&self) -> u32 {
        Position::ORDER
            .iter()
            .map(|position| u32::from(self.count(*position)))
            .sum()
    }

    /// Renders the non-zero counters as `"{tag}:{count}"` joined by `", "`.
    ///
    /// Tags are always emitted in the order FW, MF, DF, GK, ALL.
    /// Returns `None` when every counter is zero.
    #[must_use]
    pub fn preferred_positions(&self) -> Option<String> {
        let entries: Vec<String> = Position::ORDER
            .iter()
            .filter(|position| self.count(**position) > 0)
            .map(|position| format!("{}:{}", position.as_str(), self.count(*position)))
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(entries.join(", "))
        }
    }

    /// Parses a preferred positions string produced by [`Self::preferred_positions`].
    ///
    /// An empty string yields an empty simple selection. A string holding only
    /// an `ALL` entry yields a simple selection, one holding only field
    /// positions yields a detailed selection. Counts above a tag's bound are
    /// clamped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entry is not of the form `TAG:COUNT`
    /// - A tag is unknown
    /// - `ALL` is mixed with field positions
    pub fn parse_preferred_positions(value: &str) -> Result<Self, DomainError> {
        let mut all: Option<u8> = None;
        let mut counts: PositionCounts = PositionCounts::default();
        let mut has_field_positions: bool = false;

        for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (tag, count) = entry
                .split_once(':')
                .ok_or_else(|| DomainError::InvalidPositionEntry(entry.to_string()))?;
            let position: Position = tag.parse()?;
            let count: u8 = count
                .trim()
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidPositionEntry(entry.to_string()))?
                .min(u32::from(position.bound()))
                .try_into()
                .map_err(|_| DomainError::InvalidPositionEntry(entry.to_string()))?;

            if let Some(slot) = counts.slot(position) {
                *slot = count;
                has_field_positions = true;
            } else {
                all = Some(count);
            }
        }

        match (all, has_field_positions) {
            (Some(_), true) => Err(DomainError::InvalidPositionEntry(value.to_string())),
            (_, true) => Ok(Self::Detailed(counts)),
            (all, false) => Ok(Self::Simple {
                all: all.unwrap_or(0),
            }),
        }
    }
}

fn saturating_adjust(current: u8, delta: i32, bound: u8) -> u8 {
    let next: i32 = i32::from(current)
        .saturating_add(delta)
        .clamp(0, i32::from(bound));
    u8::try_from(next).unwrap_or(bound)
}
