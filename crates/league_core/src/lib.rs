//! Round-robin league engine
//!
//! This crate provides:
//! - Team registration and per-team result counters
//! - Home-and-away fixture generation over a shuffled roster
//! - Result application with league-wide attack/defense strength updates
//! - Ranked and unranked standings tables
//!
//! # Usage
//!
//! ```
//! use league_core::League;
//!
//! let mut league = League::new(2).unwrap();
//! league.add_team("Rovers");
//! league.add_team("United");
//!
//! let fixtures = league.generate_fixtures_seeded(7).unwrap().to_vec();
//! assert_eq!(fixtures.len(), 2);
//!
//! league.simulate_match(&fixtures[0], 2, 1).unwrap();
//! ```

mod config;
mod error;
mod fixture;
mod league;
mod schedule;
mod standings;
mod team;

pub use config::*;
pub use error::*;
pub use fixture::*;
pub use league::*;
pub use schedule::*;
pub use standings::*;
pub use team::*;
