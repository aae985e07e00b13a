//! Football Manager API Server
//!
//! Manages players and teams and moves players between teams, charging the
//! buying team a transfer fee that is paid to the selling team.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    ensure_schema, PostgresPlayerRepository, PostgresTeamRepository, PostgresUnitOfWork,
};
use app::RosterService;
use config::Config;
use domain::ports::{PlayerRepository, TeamRepository, UnitOfWork};

/// Storage adapters the router is built on
pub trait Backend: Send + Sync + 'static {
    type Players: PlayerRepository + 'static;
    type Teams: TeamRepository + 'static;
    type UnitOfWork: UnitOfWork + 'static;
}

/// PostgreSQL storage
pub struct PostgresBackend;

impl Backend for PostgresBackend {
    type Players = PostgresPlayerRepository;
    type Teams = PostgresTeamRepository;
    type UnitOfWork = PostgresUnitOfWork;
}

pub type BackendRosterService<B> =
    RosterService<<B as Backend>::Players, <B as Backend>::Teams, <B as Backend>::UnitOfWork>;

/// Application state shared across all handlers
pub struct AppState<B: Backend> {
    pub roster_service: Arc<BackendRosterService<B>>,
    pub config: Config,
}

// Derived Clone would require `B: Clone`
impl<B: Backend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            roster_service: self.roster_service.clone(),
            config: self.config.clone(),
        }
    }
}

impl<B: Backend> AppState<B> {
    pub fn new(
        players: Arc<B::Players>,
        teams: Arc<B::Teams>,
        unit_of_work: Arc<B::UnitOfWork>,
        config: Config,
    ) -> Self {
        Self {
            roster_service: Arc::new(RosterService::new(players, teams, unit_of_work)),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router over the given state
pub fn build_router<B: Backend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/health", get(health))
        // Players
        .route(
            "/players",
            get(handlers::list_players::<B>).post(handlers::create_player::<B>),
        )
        .route(
            "/players/:id",
            get(handlers::get_player::<B>)
                .put(handlers::update_player::<B>)
                .delete(handlers::delete_player::<B>),
        )
        .route(
            "/players/:id/add-to-team",
            post(handlers::add_player_to_team::<B>),
        )
        .route("/players/:id/transfer", post(handlers::transfer_player::<B>))
        // Teams
        .route(
            "/teams",
            get(handlers::list_teams::<B>).post(handlers::create_team::<B>),
        )
        .route(
            "/teams/:id",
            get(handlers::get_team::<B>)
                .put(handlers::update_team::<B>)
                .delete(handlers::delete_team::<B>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,football_manager_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Football Manager API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.apply_schema {
        ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
    }

    // Create adapters
    let player_repo = Arc::new(PostgresPlayerRepository::new(db.clone()));
    let team_repo = Arc::new(PostgresTeamRepository::new(db.clone()));
    let unit_of_work = Arc::new(PostgresUnitOfWork::new(db));

    let state =
        AppState::<PostgresBackend>::new(player_repo, team_repo, unit_of_work, config.clone());
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
