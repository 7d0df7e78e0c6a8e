//! The league aggregate: roster, fixture list and result application

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::config::LeagueConfig;
use crate::error::{LeagueError, Result};
use crate::fixture::{Fixture, MatchOutcome};
use crate::schedule::{fixture_count, rotation_pairs};
use crate::team::{Team, TeamId};

/// A round-robin league for a fixed number of teams.
///
/// Typical flow: add exactly `team_count` teams, generate fixtures once, then
/// feed one result per fixture through [`League::simulate_match`]. The league
/// does not track which fixture is next; callers walk [`League::fixtures`]
/// themselves.
///
/// All methods take `&mut self` or `&self` and complete synchronously. Callers
/// sharing a league across threads must wrap it in a single lock.
#[derive(Debug, Clone)]
pub struct League {
    team_count: usize,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    next_id: u32,
}

impl League {
    /// Create an empty league expecting `team_count` teams (at least 2).
    pub fn new(team_count: usize) -> Result<Self> {
        if team_count < 2 {
            return Err(LeagueError::InvalidTeamCount(team_count));
        }
        Ok(Self {
            team_count,
            teams: Vec::with_capacity(team_count),
            fixtures: Vec::new(),
            next_id: 0,
        })
    }

    /// Build a league and register every team listed in `config`.
    pub fn from_config(config: &LeagueConfig) -> Result<Self> {
        config.validate()?;
        let mut league = Self::new(config.effective_team_count())?;
        for name in &config.teams {
            league.add_team(name.as_str());
        }
        info!(
            "League '{}' created with {}/{} teams",
            config.name,
            league.teams.len(),
            league.team_count
        );
        Ok(league)
    }

    /// Append a team to the roster and return its id.
    ///
    /// Names are not checked for duplicates. Adding more teams than the
    /// configured count is accepted, but fixture generation will then refuse
    /// to run.
    pub fn add_team(&mut self, name: impl Into<String>) -> TeamId {
        let id = TeamId(self.next_id);
        self.next_id += 1;
        let team = Team::new(id, name);
        debug!("Added team {} '{}'", id, team.name());
        self.teams.push(team);
        if self.teams.len() > self.team_count {
            warn!(
                "Roster has {} teams but the league is configured for {}",
                self.teams.len(),
                self.team_count
            );
        }
        id
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Whether the roster holds exactly the configured number of teams
    pub fn is_complete(&self) -> bool {
        self.teams.len() == self.team_count
    }

    /// Roster in its current order (shuffled once fixtures are generated)
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id() == id)
    }

    /// Fixtures in generation order (empty before generation)
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Home and away teams of `fixture`, if both belong to this league
    pub fn fixture_teams(&self, fixture: &Fixture) -> Option<(&Team, &Team)> {
        Some((self.team(fixture.home())?, self.team(fixture.away())?))
    }

    /// Shuffle the roster with the thread-local RNG and build the fixture list.
    pub fn generate_fixtures(&mut self) -> Result<&[Fixture]> {
        self.generate_fixtures_with_rng(&mut thread_rng())
    }

    /// Same as [`League::generate_fixtures`] with a reproducible shuffle.
    pub fn generate_fixtures_seeded(&mut self, seed: u64) -> Result<&[Fixture]> {
        self.generate_fixtures_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Shuffle the roster with `rng`, then let every roster position host
    /// every other position once.
    ///
    /// Produces `n * (n - 1)` fixtures. Fails without touching the roster or
    /// fixture list when the roster is not complete or fixtures already exist.
    pub fn generate_fixtures_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[Fixture]> {
        if !self.is_complete() {
            warn!(
                "Not all teams have been added to the league ({}/{})",
                self.teams.len(),
                self.team_count
            );
            return Err(LeagueError::RosterIncomplete {
                expected: self.team_count,
                actual: self.teams.len(),
            });
        }
        if !self.fixtures.is_empty() {
            warn!("Fixture generation requested twice, keeping the existing list");
            return Err(LeagueError::FixturesAlreadyGenerated);
        }

        self.teams.shuffle(rng);

        // Collected before assignment so an error cannot leave a partial schedule
        let mut fixtures = Vec::with_capacity(fixture_count(self.teams.len()));
        for (home, away) in rotation_pairs(self.teams.len()) {
            fixtures.push(Fixture::new(self.teams[home].id(), self.teams[away].id())?);
        }
        self.fixtures = fixtures;

        info!(
            "Generated {} fixtures for {} teams",
            self.fixtures.len(),
            self.teams.len()
        );
        Ok(&self.fixtures)
    }

    /// Apply one result and refresh every team's attack/defense strength.
    ///
    /// The fixture is not checked against this league's fixture list and
    /// may be applied more than once; each application counts again. A
    /// fixture naming a team twice or a team missing from the roster is
    /// rejected, as is a result that would overflow a team's counters. In
    /// every rejected case nothing is changed.
    pub fn simulate_match(
        &mut self,
        fixture: &Fixture,
        home_goals: u32,
        away_goals: u32,
    ) -> Result<MatchOutcome> {
        if fixture.home() == fixture.away() {
            return Err(LeagueError::SelfFixture(fixture.home()));
        }
        let home = self.position_of(fixture.home())?;
        let away = self.position_of(fixture.away())?;
        let outcome = MatchOutcome::from_score(home_goals, away_goals);

        // Both sides are updated on copies so an overflow on either leaves the roster as it was
        let mut home_team = self.teams[home].clone();
        home_team
            .record_match(home_goals, away_goals)
            .ok_or(LeagueError::CounterOverflow(fixture.home()))?;
        let mut away_team = self.teams[away].clone();
        away_team
            .record_match(away_goals, home_goals)
            .ok_or(LeagueError::CounterOverflow(fixture.away()))?;

        debug!(
            "{} {}-{} {} ({})",
            home_team.name(),
            home_goals,
            away_goals,
            away_team.name(),
            outcome.symbol()
        );

        self.teams[home] = home_team;
        self.teams[away] = away_team;
        self.update_team_strengths();
        Ok(outcome)
    }

    fn position_of(&self, id: TeamId) -> Result<usize> {
        self.teams
            .iter()
            .position(|team| team.id() == id)
            .ok_or(LeagueError::UnknownTeam(id))
    }

    fn update_team_strengths(&mut self) {
        for team in &mut self.teams {
            team.recalculate_strengths();
            trace!(
                "{}: attack {:.2}, defense {:.2}",
                team.name(),
                team.attack_strength(),
                team.defense_strength()
            );
        }
    }
}

#[cfg(test)]
#[path = "league_tests.rs"]
mod league_tests;
