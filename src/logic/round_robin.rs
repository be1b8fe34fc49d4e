//! Single round-robin fixture generation (circle method).

use crate::models::{Fixture, ScheduledTournament, Team, Tournament};

/// Generate the full single round-robin schedule for a roster.
///
/// 1. Pad an odd roster with a bye slot so the working list is even (n').
/// 2. Play n' - 1 rounds of n' / 2 slots: slot `i` pairs position `i` (home)
///    against position `n' - 1 - i` (away). Pairings with the bye are skipped.
/// 3. After each round keep position 0 fixed and rotate the rest one step right.
///
/// Output is in round order, then slot order. Home/away follows roster order and
/// is never swapped. Zero or one team yields an empty schedule. Team ids are not
/// checked for uniqueness here (see `validate_distinct_teams`).
pub fn generate_schedule(teams: &[Team]) -> Vec<Fixture> {
    let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }
    let rounds = n - 1;
    let per_round = n / 2;

    let mut fixtures = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for round in 0..rounds {
        for i in 0..per_round {
            if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                fixtures.push(Fixture::new(round as u32 + 1, home.clone(), away.clone()));
            }
        }
        rotate(&mut slots);
    }
    fixtures
}

/// Generate a schedule for each tournament's roster, keeping order, id and name.
/// Tournaments with fewer than two teams come back with an empty `matches` list.
pub fn generate_schedules_for_tournaments(tournaments: &[Tournament]) -> Vec<ScheduledTournament> {
    tournaments
        .iter()
        .map(|t| {
            let matches = generate_schedule(&t.teams);
            log::debug!(
                "Generated {} match(es) for tournament {} ({} teams)",
                matches.len(),
                t.id,
                t.teams.len()
            );
            ScheduledTournament {
                tournament_id: t.id,
                tournament_name: t.name.clone(),
                matches,
            }
        })
        .collect()
}

/// Fix position 0; move the last slot to position 1, shifting the rest right.
fn rotate<T>(slots: &mut [T]) {
    if slots.len() > 2 {
        slots[1..].rotate_right(1);
    }
}
