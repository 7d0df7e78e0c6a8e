//! League tables: ranked standings and plain roster listings

use serde::Serialize;
use std::cmp::Ordering;

use crate::team::{Team, TeamId};

/// One line of a league table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    /// 1-based position in the table
    pub position: usize,
    pub team: TeamId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    fn from_team(position: usize, team: &Team) -> Self {
        Self {
            position,
            team: team.id(),
            name: team.name().to_string(),
            played: team.matches_played(),
            wins: team.wins(),
            draws: team.draws(),
            losses: team.losses(),
            goals_for: team.goals_for(),
            goals_against: team.goals_against(),
            goal_difference: team.goal_difference(),
            points: team.points(),
        }
    }
}

/// Table order: points, then goal difference, then goals scored, all
/// descending. Teams level on all three are listed by name, then by id, so
/// the order is total and every team gets its own position.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for().cmp(&a.goals_for()))
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Ranked table
pub fn rank(teams: &[Team]) -> Vec<StandingsRow> {
    let mut sorted: Vec<&Team> = teams.iter().collect();
    sorted.sort_by(|a, b| compare_teams(a, b));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingsRow::from_team(i + 1, team))
        .collect()
}

/// Rows in the order given, numbered as listed
pub fn roster_rows(teams: &[Team]) -> Vec<StandingsRow> {
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| StandingsRow::from_team(i + 1, team))
        .collect()
}

/// Render rows as a fixed-width text table
pub fn render_table(rows: &[StandingsRow]) -> String {
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut table = String::new();
    table.push_str(&format!(
        "{:>3}  {:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "#",
        "Team",
        "P",
        "W",
        "D",
        "L",
        "GF",
        "GA",
        "GD",
        "Pts",
        width = width
    ));
    table.push_str(&"-".repeat(width + 41));
    table.push('\n');

    for row in rows {
        table.push_str(&format!(
            "{:>3}  {:<width$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}\n",
            row.position,
            row.name,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            row.points,
            width = width
        ));
    }

    table
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
