//! League CLI
//!
//! Set up a league, then enter results one fixture at a time.

mod input;
mod logging;

use anyhow::{bail, Context};
use league_core::{rank, render_table, roster_rows, League, LeagueConfig};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use crate::input::{parse_score, parse_team_count, parse_team_name};

type Lines<'a> = dyn Iterator<Item = io::Result<String>> + 'a;

fn print_usage() {
    println!("League Runner");
    println!();
    println!("Usage:");
    println!("  league play [--config FILE] [--seed N] [--json] [-v]");
    println!("  league schedule [--config FILE] [--seed N] [-v]");
    println!();
    println!("Without --config the team count and names are read from stdin.");
    println!("Scores are entered as 'HOME-AWAY', e.g. 2-1, 2:1 or '2 1'.");
    println!();
    println!("Examples:");
    println!("  league play --config league.toml --seed 42");
    println!("  league schedule --config league.toml");
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
    verbosity: u8,
}

fn parse_options(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let value = args.get(i + 1).context("--config requires a file path")?;
                options.config = Some(PathBuf::from(value));
                i += 1;
            }
            "--seed" | "-s" => {
                let value = args.get(i + 1).context("--seed requires a number")?;
                let seed = value
                    .parse()
                    .with_context(|| format!("invalid seed '{}'", value))?;
                options.seed = Some(seed);
                i += 1;
            }
            "--json" => options.json = true,
            "-v" | "--verbose" => options.verbosity += 1,
            "-vv" => options.verbosity += 2,
            other => bail!("unknown option '{}'", other),
        }
        i += 1;
    }

    Ok(options)
}

/// Print `message` and read one line, `None` once stdin is exhausted
fn prompt(lines: &mut Lines<'_>, message: &str) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None),
    }
}

/// Keep prompting until `parse` accepts the line
fn prompt_until_valid<T>(
    lines: &mut Lines<'_>,
    message: &str,
    parse: fn(&str) -> Result<T, String>,
) -> anyhow::Result<Option<T>> {
    while let Some(line) = prompt(lines, message)? {
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("Invalid input: {}", e),
        }
    }
    Ok(None)
}

/// Build the league from the config file or interactively, then fill any
/// roster places the config left open.
fn setup_league(options: &Options, lines: &mut Lines<'_>) -> anyhow::Result<(League, Option<u64>)> {
    let (mut league, config_seed) = match &options.config {
        Some(path) => {
            let config = LeagueConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (League::from_config(&config)?, config.seed)
        }
        None => {
            let count = prompt_until_valid(
                lines,
                "Enter the number of teams in the league: ",
                parse_team_count,
            )?
            .context("no team count given")?;
            (League::new(count)?, None)
        }
    };

    while !league.is_complete() {
        let position = league.teams().len() + 1;
        let name = prompt_until_valid(
            lines,
            &format!("Enter the name of team {}: ", position),
            parse_team_name,
        )?
        .with_context(|| format!("no name given for team {}", position))?;
        league.add_team(name);
    }

    Ok((league, options.seed.or(config_seed)))
}

fn generate(league: &mut League, seed: Option<u64>) -> anyhow::Result<()> {
    match seed {
        Some(seed) => {
            info!("Using fixture seed {}", seed);
            league.generate_fixtures_seeded(seed)?;
        }
        None => {
            league.generate_fixtures()?;
        }
    }
    Ok(())
}

fn run_play(args: &[String]) -> anyhow::Result<()> {
    let options = parse_options(args)?;
    logging::setup_logging(options.verbosity);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (mut league, seed) = setup_league(&options, &mut lines)?;
    generate(&mut league, seed)?;

    println!();
    println!("=== League Standings ===");
    print!("{}", render_table(&roster_rows(league.teams())));

    let fixtures = league.fixtures().to_vec();
    let mut played = 0;

    for (index, fixture) in fixtures.iter().enumerate() {
        let (home, away) = league
            .fixture_teams(fixture)
            .context("fixture refers to a team outside the league")?;
        println!();
        println!(
            "Fixture {}/{}: {} vs {}",
            index + 1,
            fixtures.len(),
            home.name(),
            away.name()
        );

        let Some((home_goals, away_goals)) =
            prompt_until_valid(&mut lines, "Score (home-away): ", parse_score)?
        else {
            println!();
            println!("Input closed after {} of {} fixtures.", played, fixtures.len());
            break;
        };

        league.simulate_match(fixture, home_goals, away_goals)?;
        played += 1;

        println!();
        print!("{}", render_table(&roster_rows(league.teams())));
    }

    if played == fixtures.len() {
        println!();
        println!("All matches have been simulated and submitted.");
    }

    let table = rank(league.teams());
    if options.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!();
        println!("=== Final Standings ===");
        print!("{}", render_table(&table));
    }

    Ok(())
}

fn run_schedule(args: &[String]) -> anyhow::Result<()> {
    let options = parse_options(args)?;
    logging::setup_logging(options.verbosity);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let (mut league, seed) = setup_league(&options, &mut lines)?;
    generate(&mut league, seed)?;

    println!();
    println!("=== Fixtures ===");
    for (index, fixture) in league.fixtures().iter().enumerate() {
        let (home, away) = league
            .fixture_teams(fixture)
            .context("fixture refers to a team outside the league")?;
        println!("{:>4}. {} vs {}", index + 1, home.name(), away.name());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "schedule" | "fixtures" => run_schedule(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
