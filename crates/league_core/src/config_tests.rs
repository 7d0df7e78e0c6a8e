use super::*;
use std::io::Write;

#[test]
fn test_parse_full_config() {
    let config = LeagueConfig::from_toml_str(
        r#"
name = "Sunday League"
teams = ["Rovers", "United", "Athletic"]
seed = 42
"#,
    )
    .unwrap();

    assert_eq!(config.name, "Sunday League");
    assert_eq!(config.teams.len(), 3);
    assert_eq!(config.effective_team_count(), 3);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = LeagueConfig::from_toml_str(r#"teams = ["A", "B"]"#).unwrap();

    assert_eq!(config.name, "League");
    assert_eq!(config.team_count, None);
    assert_eq!(config.seed, None);
}

#[test]
fn test_team_count_may_exceed_listed_names() {
    let config = LeagueConfig::from_toml_str(
        r#"
team_count = 4
teams = ["A", "B"]
"#,
    )
    .unwrap();

    assert_eq!(config.effective_team_count(), 4);
}

#[test]
fn test_rejects_too_few_teams() {
    let err = LeagueConfig::from_toml_str(r#"teams = ["Solo"]"#).unwrap_err();
    assert!(matches!(err, LeagueError::InvalidTeamCount(1)));

    let err = LeagueConfig::default().validate().unwrap_err();
    assert!(matches!(err, LeagueError::InvalidTeamCount(0)));
}

#[test]
fn test_rejects_more_names_than_team_count() {
    let err = LeagueConfig::from_toml_str(
        r#"
team_count = 2
teams = ["A", "B", "C"]
"#,
    )
    .unwrap_err();

    assert!(matches!(err, LeagueError::Config(_)));
}

#[test]
fn test_rejects_blank_team_name() {
    let err = LeagueConfig::from_toml_str(r#"teams = ["A", "  "]"#).unwrap_err();

    assert!(err.to_string().contains("position 2"));
}

#[test]
fn test_rejects_malformed_toml() {
    let err = LeagueConfig::from_toml_str("teams = [").unwrap_err();

    assert!(matches!(err, LeagueError::Config(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"teams = ["Rovers", "United"]"#).unwrap();

    let config = LeagueConfig::load(file.path()).unwrap();
    assert_eq!(config.teams, vec!["Rovers", "United"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LeagueConfig::load(&dir.path().join("missing.toml")).unwrap_err();

    assert!(matches!(err, LeagueError::Io(_)));
}
