//! Team identity, result counters and derived metrics

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Stable identifier handed out by [`crate::League::add_team`].
///
/// Ids follow addition order and do not change when the roster is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Points awarded for a win
pub const POINTS_PER_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_PER_DRAW: u32 = 1;

/// A league participant and its accumulated results.
///
/// Counters only ever grow, and only through [`crate::League::simulate_match`].
/// Points and goal difference are computed on every read. Attack and defense
/// strength are cached values refreshed after each simulated match anywhere
/// in the league.
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: String,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    attack_strength: f64,
    defense_strength: f64,
}

impl Team {
    pub(crate) fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            attack_strength: 0.0,
            defense_strength: 0.0,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// 3 per win, 1 per draw
    pub fn points(&self) -> u32 {
        self.wins * POINTS_PER_WIN + self.draws * POINTS_PER_DRAW
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Goals scored per match, as of the last recalculation.
    ///
    /// `0.0` until the team has played a match.
    pub fn attack_strength(&self) -> f64 {
        self.attack_strength
    }

    /// Goals conceded per match, as of the last recalculation.
    ///
    /// `0.0` until the team has played a match.
    pub fn defense_strength(&self) -> f64 {
        self.defense_strength
    }

    /// Credit one match scored `scored`-`conceded` from this team's side.
    ///
    /// Returns `None` and leaves the team untouched if any counter, or the
    /// points and matches-played totals derived from them, would overflow.
    pub(crate) fn record_match(&mut self, scored: u32, conceded: u32) -> Option<()> {
        let goals_for = self.goals_for.checked_add(scored)?;
        let goals_against = self.goals_against.checked_add(conceded)?;
        let (wins, draws, losses) = match scored.cmp(&conceded) {
            Ordering::Greater => (self.wins.checked_add(1)?, self.draws, self.losses),
            Ordering::Equal => (self.wins, self.draws.checked_add(1)?, self.losses),
            Ordering::Less => (self.wins, self.draws, self.losses.checked_add(1)?),
        };

        wins.checked_add(draws)?.checked_add(losses)?;
        wins.checked_mul(POINTS_PER_WIN)?
            .checked_add(draws.checked_mul(POINTS_PER_DRAW)?)?;

        self.goals_for = goals_for;
        self.goals_against = goals_against;
        self.wins = wins;
        self.draws = draws;
        self.losses = losses;
        Some(())
    }

    /// Refresh the cached per-match averages from the current counters.
    pub(crate) fn recalculate_strengths(&mut self) {
        let played = self.matches_played();
        if played == 0 {
            self.attack_strength = 0.0;
            self.defense_strength = 0.0;
            return;
        }
        self.attack_strength = f64::from(self.goals_for) / f64::from(played);
        self.defense_strength = f64::from(self.goals_against) / f64::from(played);
    }
}

#[cfg(test)]
impl Team {
    /// Team with preset counters, for table tests
    pub(crate) fn with_record(
        id: TeamId,
        name: &str,
        (wins, draws, losses): (u32, u32, u32),
        (goals_for, goals_against): (u32, u32),
    ) -> Self {
        Self {
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            ..Self::new(id, name)
        }
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
