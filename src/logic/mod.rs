//! League business logic: fixture generation, schedule helpers, export.

mod export;
mod round_robin;
mod schedule;

pub use export::write_fixture_csv;
pub use round_robin::{generate_schedule, generate_schedules_for_tournaments};
pub use schedule::{group_by_round, match_count, round_count, validate_distinct_teams};
