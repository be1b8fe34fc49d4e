//! Fixture (single match of a schedule), Round grouping, and batch output.

use crate::models::team::Team;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// One match of a round-robin schedule. Scores, venue and kickoff are filled in downstream.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// 1-indexed round ("jornada").
    pub round: u32,
    pub home: Team,
    pub away: Team,
}

impl Fixture {
    pub fn new(round: u32, home: Team, away: Team) -> Self {
        Self { round, home, away }
    }

    /// True if the given team plays in this fixture (home or away).
    pub fn involves(&self, team: &Team) -> bool {
        self.home.id == team.id || self.away.id == team.id
    }
}

/// Fixtures of one round, for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub fixtures: Vec<Fixture>,
    /// Teams with a bye this round (odd rosters only).
    pub resting: Vec<Team>,
}

/// A tournament's identifying fields paired with its freshly generated schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTournament {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub matches: Vec<Fixture>,
}
