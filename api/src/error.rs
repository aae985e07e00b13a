//! Unified error types for the Football Manager API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage port errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{PlayerId, TeamId};

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Player already on team: {0}")]
    PlayerAlreadyOnTeam(String),

    #[error("Player {0} does not belong to any team")]
    PlayerHasNoTeam(PlayerId),

    #[error("Insufficient funds in the budget of team {team_id}: budget {budget}, transfer fee {fee}")]
    InsufficientBudget {
        team_id: TeamId,
        budget: Decimal,
        fee: Decimal,
    },

    #[error("Invalid player age: {0}")]
    InvalidPlayerAge(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::PlayerAlreadyOnTeam(msg)) => (
                StatusCode::BAD_REQUEST,
                "Player already on team",
                Some(msg.clone()),
            ),
            AppError::Domain(e @ DomainError::PlayerHasNoTeam(_)) => (
                StatusCode::BAD_REQUEST,
                "Player has no team",
                Some(e.to_string()),
            ),
            AppError::Domain(e @ DomainError::InsufficientBudget { .. }) => (
                StatusCode::BAD_REQUEST,
                "Insufficient budget",
                Some(e.to_string()),
            ),
            AppError::Domain(DomainError::InvalidPlayerAge(msg)) => (
                StatusCode::BAD_REQUEST,
                "Invalid player age",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
