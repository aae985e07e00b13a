//! Player handlers
//!
//! Endpoints for player CRUD plus assignment and transfers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Page, Player, PlayerDetails, PlayerId, TeamId};
use crate::error::AppError;
use crate::{AppState, Backend};

/// Query parameters for listing a team's players
#[derive(Debug, Deserialize)]
pub struct ListPlayersQuery {
    #[serde(rename = "teamId", alias = "team_id")]
    pub team_id: Uuid,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

/// Target team for assignment and transfer
#[derive(Debug, Deserialize)]
pub struct TeamIdQuery {
    #[serde(rename = "teamId", alias = "team_id")]
    pub team_id: Uuid,
}

/// Body of create and update requests
#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    /// Must be absent on create; must match the path on update
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub career_start_date: NaiveDate,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

impl PlayerRequest {
    fn into_details(self) -> (Option<Uuid>, PlayerDetails) {
        (
            self.id,
            PlayerDetails {
                first_name: self.first_name,
                last_name: self.last_name,
                birth_date: self.birth_date,
                career_start_date: self.career_start_date,
                team_id: self.team_id.map(TeamId),
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct PlayerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub career_start_date: NaiveDate,
    pub team_id: Option<Uuid>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id.0,
            first_name: player.first_name,
            last_name: player.last_name,
            birth_date: player.birth_date,
            career_start_date: player.career_start_date,
            team_id: player.team_id.map(|t| t.0),
        }
    }
}

/// GET /players?teamId=
///
/// List the players of a team, ordered by id.
pub async fn list_players<B: Backend>(
    State(state): State<AppState<B>>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<Json<Page<PlayerResponse>>, AppError> {
    let paging = super::PageQuery {
        page: query.page,
        size: query.size,
    };
    let request = paging.page_request(&state.config)?;

    let page = state
        .roster_service
        .list_players_by_team(&TeamId(query.team_id), request)
        .await?;

    Ok(Json(page.map(PlayerResponse::from)))
}

/// GET /players/:id
pub async fn get_player<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = state.roster_service.get_player(&PlayerId(id)).await?;
    Ok(Json(player.into()))
}

/// POST /players
pub async fn create_player<B: Backend>(
    State(state): State<AppState<B>>,
    Json(request): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), AppError> {
    let (requested_id, details) = request.into_details();

    let player = state
        .roster_service
        .create_player(requested_id.map(PlayerId), details)
        .await?;

    Ok((StatusCode::CREATED, Json(player.into())))
}

/// PUT /players/:id
///
/// Replace a player's fields. The team may not change here.
pub async fn update_player<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
    Json(request): Json<PlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let (body_id, details) = request.into_details();
    if body_id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::BadRequest(
            "Player id in body does not match the path".to_string(),
        ));
    }

    let player = state
        .roster_service
        .update_player(&PlayerId(id), details)
        .await?;

    Ok(Json(player.into()))
}

/// DELETE /players/:id
pub async fn delete_player<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.roster_service.delete_player(&PlayerId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /players/:id/add-to-team?teamId=
///
/// Put an unassigned player on a team. No fee is charged.
pub async fn add_player_to_team<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
    Query(query): Query<TeamIdQuery>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = state
        .roster_service
        .assign_player_to_team(&PlayerId(id), &TeamId(query.team_id))
        .await?;

    Ok(Json(player.into()))
}

/// POST /players/:id/transfer?teamId=
///
/// Sell a player to the given team, moving the fee between budgets.
/// Responds with the player; the fee shows up in both team budgets.
pub async fn transfer_player<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
    Query(query): Query<TeamIdQuery>,
) -> Result<Json<PlayerResponse>, AppError> {
    let outcome = state
        .roster_service
        .transfer_player(&PlayerId(id), &TeamId(query.team_id))
        .await?;

    Ok(Json(outcome.player.into()))
}
