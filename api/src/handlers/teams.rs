//! Team handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PageQuery;
use crate::domain::entities::{Page, Team, TeamDetails, TeamId};
use crate::error::AppError;
use crate::{AppState, Backend};

/// Body of create and update requests
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    /// Must be absent on create; must match the path on update
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub transfer_commission_percent: Decimal,
    pub budget: Decimal,
}

impl TeamRequest {
    fn into_details(self) -> (Option<Uuid>, TeamDetails) {
        (
            self.id,
            TeamDetails {
                name: self.name,
                transfer_commission_percent: self.transfer_commission_percent,
                budget: self.budget,
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub transfer_commission_percent: Decimal,
    pub budget: Decimal,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.0,
            name: team.name,
            transfer_commission_percent: team.transfer_commission_percent,
            budget: team.budget,
        }
    }
}

/// GET /teams
pub async fn list_teams<B: Backend>(
    State(state): State<AppState<B>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<TeamResponse>>, AppError> {
    let request = query.page_request(&state.config)?;
    let page = state.roster_service.list_teams(request).await?;
    Ok(Json(page.map(TeamResponse::from)))
}

/// GET /teams/:id
pub async fn get_team<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, AppError> {
    let team = state.roster_service.get_team(&TeamId(id)).await?;
    Ok(Json(team.into()))
}

/// POST /teams
pub async fn create_team<B: Backend>(
    State(state): State<AppState<B>>,
    Json(request): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), AppError> {
    let (requested_id, details) = request.into_details();

    let team = state
        .roster_service
        .create_team(requested_id.map(TeamId), details)
        .await?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// PUT /teams/:id
pub async fn update_team<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
    Json(request): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    let (body_id, details) = request.into_details();
    if body_id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::BadRequest(
            "Team id in body does not match the path".to_string(),
        ));
    }

    let team = state
        .roster_service
        .update_team(&TeamId(id), details)
        .await?;

    Ok(Json(team.into()))
}

/// DELETE /teams/:id
///
/// Refused with 409 while players still belong to the team.
pub async fn delete_team<B: Backend>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.roster_service.delete_team(&TeamId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
