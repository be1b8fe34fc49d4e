//! REST API: league tournaments, rosters and round-robin fixtures.

use crate::{
    generate_schedule, generate_schedules_for_tournaments, group_by_round,
    validate_distinct_teams, write_fixture_csv, Round, Team, TeamId, Tournament, TournamentId,
};
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    HttpResponse, Responder,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory registry: every tournament by id. Writers are serialized by the lock, so
/// regenerating a fixture never races another regeneration.
pub type Registry = RwLock<HashMap<TournamentId, Tournament>>;

type AppState = Data<Registry>;

/// Empty registry, ready to hand to `App::app_data`.
pub fn new_state() -> Data<Registry> {
    Data::new(RwLock::new(HashMap::new()))
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct GenerateFixtureBody {
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct PreviewBody {
    teams: Vec<Team>,
}

/// Stored fixture grouped by round (what the schedule screen renders).
/// Byes are reported against the roster the fixture was generated from.
#[derive(Serialize)]
struct FixtureView<'a> {
    tournament_id: TournamentId,
    tournament_name: &'a str,
    date: Option<NaiveDate>,
    rounds: Vec<Round>,
}

#[derive(Serialize)]
struct PreviewResponse {
    match_count: usize,
    rounds: Vec<Round>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and team id (e.g. /api/tournaments/{id}/teams/{team_id})
#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: TeamId,
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List all tournaments, sorted by name.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = state.read().await;
    let mut tournaments: Vec<&Tournament> = g.values().collect();
    tournaments.sort_by(|a, b| a.name.cmp(&b.name));
    HttpResponse::Ok().json(tournaments)
}

/// Create a new tournament with an empty roster.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<NameBody>) -> HttpResponse {
    let tournament = match Tournament::try_new(&body.name) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    log::info!("Created tournament {} ({})", tournament.name, tournament.id);
    let response = HttpResponse::Ok().json(&tournament);
    state.write().await.insert(tournament.id, tournament);
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.read().await.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => no_tournament(),
    }
}

/// Rename a tournament.
#[put("/api/tournaments/{id}/name")]
async fn api_rename_tournament(state: AppState, path: Path<TournamentPath>, body: Json<NameBody>) -> HttpResponse {
    let mut g = state.write().await;
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.rename(&body.name) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Delete a tournament together with its stored fixture.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.write().await.remove(&path.id) {
        Some(t) => {
            log::info!("Deleted tournament {} ({})", t.name, t.id);
            HttpResponse::NoContent().finish()
        }
        None => no_tournament(),
    }
}

/// Enter a team (names unique per tournament, case-insensitive).
#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<NameBody>) -> HttpResponse {
    let mut g = state.write().await;
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.add_team(body.name.as_str()) {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Withdraw a team by id. The stored fixture stays until regenerated.
#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    let mut g = state.write().await;
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.remove_team(path.team_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Generate the round-robin fixture from the current roster, replacing any stored one.
#[post("/api/tournaments/{id}/fixture/generate")]
async fn api_generate_fixture(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<GenerateFixtureBody>>,
) -> HttpResponse {
    let date = body.and_then(|b| b.into_inner().date);
    let mut g = state.write().await;
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    if let Err(e) = validate_distinct_teams(&t.teams) {
        return bad_request(e);
    }
    let fixture = generate_schedule(&t.teams);
    log::info!(
        "Generated fixture for {} ({}): {} team(s), {} match(es)",
        t.name,
        t.id,
        t.teams.len(),
        fixture.len()
    );
    t.set_fixture(fixture, date);
    HttpResponse::Ok().json(FixtureView {
        tournament_id: t.id,
        tournament_name: &t.name,
        date: t.fixture_date,
        rounds: t.rounds(),
    })
}

/// Stored fixture grouped by round.
#[get("/api/tournaments/{id}/fixture")]
async fn api_get_fixture(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = state.read().await;
    let t = match g.get(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    HttpResponse::Ok().json(FixtureView {
        tournament_id: t.id,
        tournament_name: &t.name,
        date: t.fixture_date,
        rounds: t.rounds(),
    })
}

/// Clear the stored fixture.
#[delete("/api/tournaments/{id}/fixture")]
async fn api_clear_fixture(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = state.write().await;
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    t.clear_fixture();
    HttpResponse::Ok().json(t)
}

/// Download the stored fixture as CSV.
#[get("/api/tournaments/{id}/fixture.csv")]
async fn api_fixture_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = state.read().await;
    let t = match g.get(&path.id) {
        Some(t) => t,
        None => return no_tournament(),
    };
    let mut buf = Vec::new();
    if let Err(e) = write_fixture_csv(&t.fixture, t.fixture_date, &mut buf) {
        log::error!("CSV export failed for tournament {}: {}", t.id, e);
        return HttpResponse::InternalServerError().body("export error");
    }
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"fixture-{}.csv\"", t.id),
        ))
        .body(buf)
}

/// Generate and store fixtures for every tournament. Tournaments with fewer than two
/// teams are included with an empty match list.
#[post("/api/fixtures/generate")]
async fn api_generate_all(state: AppState, body: Option<Json<GenerateFixtureBody>>) -> HttpResponse {
    let date = body.and_then(|b| b.into_inner().date);
    let mut g = state.write().await;
    let mut snapshot: Vec<Tournament> = g.values().cloned().collect();
    snapshot.sort_by(|a, b| a.name.cmp(&b.name));
    for t in &snapshot {
        if let Err(e) = validate_distinct_teams(&t.teams) {
            return bad_request(format!("{}: {}", t.name, e));
        }
    }

    let scheduled = generate_schedules_for_tournaments(&snapshot);
    for s in &scheduled {
        if let Some(t) = g.get_mut(&s.tournament_id) {
            t.set_fixture(s.matches.clone(), date);
        }
    }
    log::info!("Generated fixtures for {} tournament(s)", scheduled.len());
    HttpResponse::Ok().json(scheduled)
}

/// Generate a fixture for an ad-hoc roster without storing anything.
#[post("/api/fixtures/preview")]
async fn api_preview_fixture(body: Json<PreviewBody>) -> HttpResponse {
    if let Err(e) = validate_distinct_teams(&body.teams) {
        return bad_request(e);
    }
    let fixture = generate_schedule(&body.teams);
    HttpResponse::Ok().json(PreviewResponse {
        match_count: fixture.len(),
        rounds: group_by_round(&fixture, &body.teams),
    })
}

/// Register every route of the API.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_list_tournaments)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_rename_tournament)
        .service(api_delete_tournament)
        .service(api_add_team)
        .service(api_remove_team)
        .service(api_generate_fixture)
        .service(api_fixture_csv)
        .service(api_get_fixture)
        .service(api_clear_fixture)
        .service(api_generate_all)
        .service(api_preview_fixture);
}
