use super::*;

fn team(id: u32, name: &str, wins: u32, draws: u32, losses: u32, gf: u32, ga: u32) -> Team {
    Team::with_record(TeamId(id), name, (wins, draws, losses), (gf, ga))
}

fn names(rows: &[StandingsRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_rank_by_points_first() {
    let teams = vec![
        team(0, "Low", 0, 1, 2, 5, 1),
        team(1, "High", 2, 0, 1, 2, 6),
        team(2, "Mid", 1, 1, 1, 3, 3),
    ];

    let rows = rank(&teams);

    assert_eq!(names(&rows), vec!["High", "Mid", "Low"]);
    assert_eq!(rows.iter().map(|r| r.position).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(rows[0].points, 6);
}

#[test]
fn test_goal_difference_breaks_points_tie() {
    let teams = vec![
        team(0, "Narrow", 1, 0, 0, 1, 0),
        team(1, "Wide", 1, 0, 0, 4, 0),
    ];

    assert_eq!(names(&rank(&teams)), vec!["Wide", "Narrow"]);
}

#[test]
fn test_goals_for_breaks_goal_difference_tie() {
    let teams = vec![
        team(0, "Tight", 1, 0, 0, 1, 0),
        team(1, "Open", 1, 0, 0, 3, 2),
    ];

    assert_eq!(names(&rank(&teams)), vec!["Open", "Tight"]);
}

#[test]
fn test_true_tie_falls_back_to_name_then_id() {
    let teams = vec![
        team(0, "Zeta", 1, 0, 0, 2, 1),
        team(1, "Alpha", 1, 0, 0, 2, 1),
        team(3, "Alpha", 1, 0, 0, 2, 1),
        team(2, "Alpha", 1, 0, 0, 2, 1),
    ];

    let rows = rank(&teams);

    assert_eq!(names(&rows), vec!["Alpha", "Alpha", "Alpha", "Zeta"]);
    assert_eq!(
        rows.iter().map(|r| r.team).collect::<Vec<_>>(),
        vec![TeamId(1), TeamId(2), TeamId(3), TeamId(0)]
    );
}

#[test]
fn test_roster_rows_keep_given_order() {
    let teams = vec![
        team(0, "Low", 0, 0, 1, 0, 1),
        team(1, "High", 1, 0, 0, 1, 0),
    ];

    assert_eq!(names(&roster_rows(&teams)), vec!["Low", "High"]);
}

#[test]
fn test_render_table_has_header_and_rows() {
    let teams = vec![team(0, "Rovers", 1, 1, 0, 3, 1), team(1, "United", 0, 1, 1, 1, 3)];

    let table = render_table(&rank(&teams));
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Team"));
    assert!(lines[0].contains("Pts"));
    assert!(lines[2].contains("Rovers"));
    assert!(lines[2].trim_end().ends_with('4'));
    assert!(lines[2].contains("+2"));
    assert!(lines[3].contains("-2"));
}
