//! Integration tests for round-robin fixture generation.

use football_league_web::{
    generate_schedule, generate_schedules_for_tournaments, match_count, round_count, Fixture,
    Team, Tournament,
};
use std::collections::HashSet;

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

fn named(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n)).collect()
}

/// Unordered pair of names, for comparing coverage regardless of home/away.
fn pair(f: &Fixture) -> (String, String) {
    let (a, b) = (f.home.name.clone(), f.away.name.clone());
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn max_round(fixtures: &[Fixture]) -> u32 {
    fixtures.iter().map(|f| f.round).max().unwrap_or(0)
}

#[test]
fn empty_roster_yields_empty_schedule() {
    assert!(generate_schedule(&[]).is_empty());
}

#[test]
fn single_team_yields_empty_schedule() {
    assert!(generate_schedule(&teams(1)).is_empty());
}

#[test]
fn two_teams_play_once_in_round_one() {
    let roster = named(&["A", "B"]);
    let fixtures = generate_schedule(&roster);
    assert_eq!(fixtures, vec![Fixture::new(1, roster[0].clone(), roster[1].clone())]);
}

#[test]
fn four_teams_cover_every_pair_in_three_rounds() {
    let fixtures = generate_schedule(&named(&["A", "B", "C", "D"]));
    assert_eq!(fixtures.len(), 6);
    assert_eq!(max_round(&fixtures), 3);
    for round in 1..=3 {
        assert_eq!(fixtures.iter().filter(|f| f.round == round).count(), 2);
    }

    let pairs: HashSet<_> = fixtures.iter().map(pair).collect();
    let expected: HashSet<_> = [("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn four_teams_pairing_order_is_deterministic() {
    let fixtures = generate_schedule(&named(&["A", "B", "C", "D"]));
    let got: Vec<(u32, &str, &str)> = fixtures
        .iter()
        .map(|f| (f.round, f.home.name.as_str(), f.away.name.as_str()))
        .collect();
    // Position 0 stays put; the rest rotate right after every round.
    assert_eq!(
        got,
        vec![
            (1, "A", "D"),
            (1, "B", "C"),
            (2, "A", "C"),
            (2, "D", "B"),
            (3, "A", "B"),
            (3, "C", "D"),
        ]
    );
}

#[test]
fn three_teams_each_rest_exactly_once() {
    let roster = named(&["A", "B", "C"]);
    let fixtures = generate_schedule(&roster);
    assert_eq!(fixtures.len(), 3);
    assert_eq!(max_round(&fixtures), 3);

    let pairs: HashSet<_> = fixtures.iter().map(pair).collect();
    let expected: HashSet<_> = [("A", "B"), ("A", "C"), ("B", "C")]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    assert_eq!(pairs, expected);

    for team in &roster {
        let rounds_played = fixtures.iter().filter(|f| f.involves(team)).count();
        assert_eq!(rounds_played, 2, "{} should sit out exactly one of 3 rounds", team.name);
    }
}

#[test]
fn sizes_and_round_legality_hold_for_many_roster_sizes() {
    for n in 0..=20 {
        let roster = teams(n);
        let fixtures = generate_schedule(&roster);
        assert_eq!(fixtures.len(), n * n.saturating_sub(1) / 2, "match count for n={n}");
        assert_eq!(fixtures.len(), match_count(n));
        assert_eq!(max_round(&fixtures), round_count(n), "round count for n={n}");

        // Rounds are contiguous and non-decreasing in output order.
        assert!(fixtures.windows(2).all(|w| w[0].round <= w[1].round));
        for round in 1..=round_count(n) {
            let mut seen = HashSet::new();
            let mut any = false;
            for f in fixtures.iter().filter(|f| f.round == round) {
                any = true;
                assert!(seen.insert(f.home.id), "n={n} round {round}: home plays twice");
                assert!(seen.insert(f.away.id), "n={n} round {round}: away plays twice");
            }
            assert!(any, "n={n}: round {round} is empty");
        }

        // Every unordered pair of distinct teams appears exactly once.
        let mut pairs = HashSet::new();
        for f in &fixtures {
            assert_ne!(f.home.id, f.away.id);
            let key = if f.home.id < f.away.id {
                (f.home.id, f.away.id)
            } else {
                (f.away.id, f.home.id)
            };
            assert!(pairs.insert(key), "n={n}: pair repeated");
        }
        assert_eq!(pairs.len(), match_count(n));
    }
}

#[test]
fn duplicate_ids_still_generate_without_panicking() {
    let a = Team::new("A");
    let roster = vec![a.clone(), a.clone(), Team::new("B")];
    let fixtures = generate_schedule(&roster);
    // Positions are treated as distinct teams: 3 entries -> 3 matches.
    assert_eq!(fixtures.len(), 3);
    assert!(fixtures.iter().any(|f| f.home.id == f.away.id));
}

#[test]
fn batch_keeps_every_tournament_including_empty_ones() {
    let league = vec![
        Tournament::with_teams("Apertura", teams(4)),
        Tournament::with_teams("Solo", teams(1)),
        Tournament::new("Empty"),
        Tournament::with_teams("Clausura", teams(5)),
    ];
    let scheduled = generate_schedules_for_tournaments(&league);
    assert_eq!(scheduled.len(), 4);
    for (s, t) in scheduled.iter().zip(&league) {
        assert_eq!(s.tournament_id, t.id);
        assert_eq!(s.tournament_name, t.name);
        assert_eq!(s.matches, generate_schedule(&t.teams));
    }
    assert_eq!(scheduled[0].matches.len(), 6);
    assert!(scheduled[1].matches.is_empty());
    assert!(scheduled[2].matches.is_empty());
    assert_eq!(scheduled[3].matches.len(), 10);
}
