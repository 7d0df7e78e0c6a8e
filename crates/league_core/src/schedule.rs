//! Home-and-away rotation over roster positions

/// Number of fixtures a full rotation produces for `n` teams.
pub fn fixture_count(n: usize) -> usize {
    n * n.saturating_sub(1)
}

/// Index pairs `(home, away)` for a roster of `n` teams.
///
/// Position `i` hosts positions `i+1, i+2, ...` (wrapping) until it has met
/// every other position once. Over all `i` this yields every ordered pair of
/// distinct positions exactly once, so each team plays every opponent at
/// home and away.
pub fn rotation_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(fixture_count(n));
    for home in 0..n {
        for offset in 0..n.saturating_sub(1) {
            let away = (home + offset + 1) % n;
            pairs.push((home, away));
        }
    }
    pairs
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
