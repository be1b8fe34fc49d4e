//! Data structures for the league: teams, tournaments, fixtures.

mod fixture;
mod team;
mod tournament;

pub use fixture::{Fixture, Round, ScheduledTournament};
pub use team::{Team, TeamId};
pub use tournament::{LeagueError, Tournament, TournamentId};
