//! Single binary web server: league tournaments, rosters and round-robin fixtures via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{App, HttpServer};
use football_league_web::api;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = api::new_state();

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
