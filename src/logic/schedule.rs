//! Schedule helpers: expected sizes, round grouping for display, roster validation.

use crate::models::{Fixture, LeagueError, Round, Team};
use std::collections::HashSet;

/// Number of rounds a single round-robin needs: n - 1 (even), n (odd), 0 for n <= 1.
pub fn round_count(team_count: usize) -> u32 {
    match team_count {
        0 | 1 => 0,
        n if n % 2 == 0 => (n - 1) as u32,
        n => n as u32,
    }
}

/// Number of matches in a single round-robin: n * (n - 1) / 2.
pub fn match_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1) / 2
}

/// Group a schedule by round number for display.
///
/// Rounds run contiguously from 1 to the highest round present. `resting` lists
/// the roster teams that do not play that round, in roster order.
pub fn group_by_round(fixtures: &[Fixture], teams: &[Team]) -> Vec<Round> {
    let last = fixtures.iter().map(|f| f.round).max().unwrap_or(0);
    (1..=last)
        .map(|number| {
            let round_fixtures: Vec<Fixture> = fixtures
                .iter()
                .filter(|f| f.round == number)
                .cloned()
                .collect();
            let resting = teams
                .iter()
                .filter(|t| !round_fixtures.iter().any(|f| f.involves(t)))
                .cloned()
                .collect();
            Round {
                number,
                fixtures: round_fixtures,
                resting,
            }
        })
        .collect()
}

/// Reject rosters where two entries share an id. The generator itself never calls this.
pub fn validate_distinct_teams(teams: &[Team]) -> Result<(), LeagueError> {
    let mut seen = HashSet::with_capacity(teams.len());
    for t in teams {
        if !seen.insert(t.id) {
            return Err(LeagueError::DuplicateTeamId(t.id));
        }
    }
    Ok(())
}
