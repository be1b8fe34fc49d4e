//! Tournament and LeagueError.

use crate::logic::group_by_round;
use crate::models::fixture::{Fixture, Round};
use crate::models::team::{Team, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while managing tournaments and rosters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Tournament or team name is empty after trimming.
    InvalidName,
    /// A team with this name is already entered (names are unique per tournament, case-insensitive).
    DuplicateTeamName,
    /// Two roster entries share the same team id.
    DuplicateTeamId(TeamId),
    /// Team not found in the tournament roster.
    TeamNotFound(TeamId),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InvalidName => write!(f, "Name must not be empty"),
            LeagueError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            LeagueError::DuplicateTeamId(id) => write!(f, "Team {} appears more than once", id),
            LeagueError::TeamNotFound(_) => write!(f, "Team not found"),
        }
    }
}

impl std::error::Error for LeagueError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A tournament: its roster and the last fixture generated for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Roster in entry order; order decides home/away in generated fixtures.
    pub teams: Vec<Team>,
    /// Stored schedule. Replaced wholesale on regeneration.
    pub fixture: Vec<Fixture>,
    /// Roster the stored fixture was generated from; byes are reported against it.
    pub fixture_teams: Vec<Team>,
    /// Single date stored alongside the fixture.
    pub fixture_date: Option<NaiveDate>,
}

impl Tournament {
    /// Create an empty tournament. The name is stored as given; use `rename` for validation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teams: Vec::new(),
            fixture: Vec::new(),
            fixture_teams: Vec::new(),
            fixture_date: None,
        }
    }

    /// Create an empty tournament, rejecting blank names. The name is stored trimmed.
    pub fn try_new(name: &str) -> Result<Self, LeagueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::InvalidName);
        }
        Ok(Self::new(name))
    }

    /// Create a tournament with an initial roster (e.g. imported). No fixture yet.
    pub fn with_teams(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::new(name)
        }
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn rename(&mut self, name: &str) -> Result<(), LeagueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::InvalidName);
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Enter a new team. Names must be unique (case-insensitive). Returns the new team's id.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, LeagueError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(LeagueError::InvalidName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(LeagueError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Withdraw a team by id. A stored fixture is left untouched until regenerated.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), LeagueError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Replace the stored fixture (previous schedule is dropped first) and snapshot the
    /// current roster it was generated from.
    pub fn set_fixture(&mut self, fixture: Vec<Fixture>, date: Option<NaiveDate>) {
        self.clear_fixture();
        self.fixture = fixture;
        self.fixture_teams = self.teams.clone();
        self.fixture_date = date;
    }

    pub fn clear_fixture(&mut self) {
        self.fixture.clear();
        self.fixture_teams.clear();
        self.fixture_date = None;
    }

    /// Stored fixture grouped by round, with byes taken from the generation-time roster.
    pub fn rounds(&self) -> Vec<Round> {
        group_by_round(&self.fixture, &self.fixture_teams)
    }

    pub fn has_fixture(&self) -> bool {
        !self.fixture.is_empty()
    }
}
