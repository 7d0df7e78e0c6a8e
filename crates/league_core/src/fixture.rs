//! Fixtures and match outcomes

use std::cmp::Ordering;

use crate::error::{LeagueError, Result};
use crate::team::TeamId;

/// A scheduled pairing of two distinct teams.
///
/// Only [`Fixture::new`] builds one, so home and away always differ.
///
/// Home and away only decide which score belongs to which team. Whether a
/// fixture has been played is tracked by the caller, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixture {
    home: TeamId,
    away: TeamId,
}

impl Fixture {
    /// Pair `home` against `away`. A team cannot be drawn against itself.
    pub fn new(home: TeamId, away: TeamId) -> Result<Self> {
        if home == away {
            return Err(LeagueError::SelfFixture(home));
        }
        Ok(Self { home, away })
    }

    pub fn home(&self) -> TeamId {
        self.home
    }

    pub fn away(&self) -> TeamId {
        self.away
    }
}

/// Result of a single match from the home team's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    pub fn from_score(home_goals: u32, away_goals: u32) -> Self {
        match home_goals.cmp(&away_goals) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Short marker in the usual 1/X/2 betting notation
    pub fn symbol(&self) -> &'static str {
        match self {
            MatchOutcome::HomeWin => "1",
            MatchOutcome::Draw => "X",
            MatchOutcome::AwayWin => "2",
        }
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod fixture_tests;
