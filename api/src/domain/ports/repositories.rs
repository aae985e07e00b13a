//! Repository port traits
//!
//! These traits define the interface for data persistence outside of a
//! transfer. Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Page, PageRequest, Player, PlayerDetails, PlayerId, Team, TeamDetails, TeamId,
};
use crate::error::DomainError;

/// Repository for Player entities
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by ID
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError>;

    /// Check whether a player with this ID exists
    async fn exists_by_id(&self, id: &PlayerId) -> Result<bool, DomainError>;

    /// Create a new player; the repository assigns the ID
    async fn create(&self, player: &PlayerDetails) -> Result<Player, DomainError>;

    /// Delete a player by ID
    async fn delete_by_id(&self, id: &PlayerId) -> Result<(), DomainError>;

    /// List players on a team, ordered by ID ascending
    async fn find_by_team(
        &self,
        team_id: &TeamId,
        page: PageRequest,
    ) -> Result<Page<Player>, DomainError>;

    /// Count players currently assigned to a team
    async fn count_by_team(&self, team_id: &TeamId) -> Result<u64, DomainError>;
}

/// Repository for Team entities
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by ID
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Check whether a team with this ID exists
    async fn exists_by_id(&self, id: &TeamId) -> Result<bool, DomainError>;

    /// Create a new team; the repository assigns the ID
    async fn create(&self, team: &TeamDetails) -> Result<Team, DomainError>;

    /// Overwrite every mutable field of an existing team
    async fn update(&self, team: &Team) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete_by_id(&self, id: &TeamId) -> Result<(), DomainError>;

    /// List all teams, ordered by ID ascending
    async fn find_all(&self, page: PageRequest) -> Result<Page<Team>, DomainError>;
}
