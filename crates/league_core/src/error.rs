//! Error type shared by every league operation

use thiserror::Error;

use crate::team::TeamId;

/// Conditions reported to the caller instead of panicking.
///
/// None of these leave the league half-updated: an operation that returns
/// an error has not changed the roster, the fixture list or any counter.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("a league needs at least 2 teams, got {0}")]
    InvalidTeamCount(usize),

    #[error("not all teams have been added to the league: expected {expected}, found {actual}")]
    RosterIncomplete { expected: usize, actual: usize },

    #[error("fixtures have already been generated for this league")]
    FixturesAlreadyGenerated,

    #[error("team {0} cannot play itself")]
    SelfFixture(TeamId),

    #[error("team {0} is not part of this league")]
    UnknownTeam(TeamId),

    #[error("result would overflow the counters of team {0}")]
    CounterOverflow(TeamId),

    #[error("invalid league configuration: {0}")]
    Config(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
