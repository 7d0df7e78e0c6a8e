//! Parsing of interactive input lines

/// Parse a scoreline such as `2-1`, `2:1` or `2 1` into (home, away).
pub fn parse_score(line: &str) -> Result<(u32, u32), String> {
    let line = line.trim();
    let separator = line
        .find(|c: char| c == '-' || c == ':')
        .or_else(|| line.find(char::is_whitespace))
        .ok_or_else(|| format!("expected two scores like '2-1', got '{}'", line))?;

    let separator_len = line[separator..].chars().next().map_or(1, char::len_utf8);
    let home = parse_goals(line[..separator].trim())?;
    let away = parse_goals(line[separator + separator_len..].trim())?;
    Ok((home, away))
}

fn parse_goals(text: &str) -> Result<u32, String> {
    text.parse::<u32>()
        .map_err(|_| format!("'{}' is not a non-negative number of goals", text))
}

/// Parse the number of teams entered at the setup prompt
pub fn parse_team_count(line: &str) -> Result<usize, String> {
    let count = line
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a number", line.trim()))?;
    if count < 2 {
        return Err("a league needs at least 2 teams".to_string());
    }
    Ok(count)
}

/// Parse a team name entered at the setup prompt
pub fn parse_team_name(line: &str) -> Result<String, String> {
    let name = line.trim();
    if name.is_empty() {
        return Err("team name cannot be empty".to_string());
    }
    Ok(name.to_string())
}
