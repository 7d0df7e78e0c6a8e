//! League setup loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LeagueError, Result};

/// Initial configuration for a league.
///
/// ```toml
/// name = "Sunday League"
/// teams = ["Rovers", "United", "Athletic", "Wanderers"]
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Display name of the league
    pub name: String,
    /// Team names, in addition order
    pub teams: Vec<String>,
    /// Number of teams the league expects (None = number of names listed)
    pub team_count: Option<usize>,
    /// Seed for the fixture shuffle (None = random each run)
    pub seed: Option<u64>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: "League".to_string(),
            teams: Vec::new(),
            team_count: None,
            seed: None,
        }
    }
}

impl LeagueConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| LeagueError::Config(format!("failed to parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn effective_team_count(&self) -> usize {
        self.team_count.unwrap_or(self.teams.len())
    }

    /// Check the team count and the listed names agree.
    ///
    /// Listing fewer names than `team_count` is allowed: the remaining teams
    /// are expected to be added by the caller before fixtures are generated.
    pub fn validate(&self) -> Result<()> {
        let count = self.effective_team_count();
        if count < 2 {
            return Err(LeagueError::InvalidTeamCount(count));
        }
        if self.teams.len() > count {
            return Err(LeagueError::Config(format!(
                "{} team names listed but team_count is {}",
                self.teams.len(),
                count
            )));
        }
        if let Some(blank) = self.teams.iter().position(|name| name.trim().is_empty()) {
            return Err(LeagueError::Config(format!(
                "team name at position {} is empty",
                blank + 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
