//! Player domain entity
//!
//! A player belongs to at most one team. The team is held as an id reference;
//! it only changes through assignment or transfer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::team::TeamId;
use crate::error::DomainError;

/// Unique identifier for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Time-ordered, so sorting by id follows creation order
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A football player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub career_start_date: NaiveDate,
    pub team_id: Option<TeamId>,
}

impl Player {
    /// Build a player from stored fields under an existing id
    pub fn from_details(id: PlayerId, details: PlayerDetails) -> Self {
        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            birth_date: details.birth_date,
            career_start_date: details.career_start_date,
            team_id: details.team_id,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.team_id.is_none()
    }
}

/// Mutable fields of a player, used for creation and full-record updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDetails {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub career_start_date: NaiveDate,
    pub team_id: Option<TeamId>,
}

impl PlayerDetails {
    /// Check field constraints relative to `today`
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        if self.first_name.trim().is_empty() {
            return Err(DomainError::Validation("First name is required".to_string()));
        }
        if self.last_name.trim().is_empty() {
            return Err(DomainError::Validation("Last name is required".to_string()));
        }
        if self.birth_date >= today {
            return Err(DomainError::Validation(
                "Birth date must be in the past".to_string(),
            ));
        }
        if self.career_start_date > today {
            return Err(DomainError::Validation(
                "Career start date can't be in the future".to_string(),
            ));
        }
        if self.career_start_date < self.birth_date {
            // Accepted, see DESIGN.md
            tracing::warn!(
                birth_date = %self.birth_date,
                career_start_date = %self.career_start_date,
                "Career start date precedes birth date"
            );
        }

        Ok(())
    }
}
