//! Football league web app: library with models, fixture logic and the REST API.

pub mod api;
pub mod logic;
pub mod models;

pub use logic::{
    generate_schedule, generate_schedules_for_tournaments, group_by_round, match_count,
    round_count, validate_distinct_teams, write_fixture_csv,
};
pub use models::{
    Fixture, LeagueError, Round, ScheduledTournament, Team, TeamId, Tournament, TournamentId,
};
