//! Roster service
//!
//! CRUD for players and teams plus the entry points for assigning and
//! transferring players. Team moves are delegated to the [`TransferEngine`].

use std::sync::Arc;

use chrono::Utc;

use crate::app::transfer_engine::{TransferEngine, TransferOutcome};
use crate::domain::entities::{
    Page, PageRequest, Player, PlayerDetails, PlayerId, Team, TeamDetails, TeamId,
};
use crate::domain::ports::{PlayerRepository, TeamRepository, UnitOfWork};
use crate::error::{AppError, DomainError};

/// Service for managing players and teams
pub struct RosterService<PR, TR, U>
where
    PR: PlayerRepository,
    TR: TeamRepository,
    U: UnitOfWork,
{
    players: Arc<PR>,
    teams: Arc<TR>,
    engine: TransferEngine<U>,
}

impl<PR, TR, U> RosterService<PR, TR, U>
where
    PR: PlayerRepository,
    TR: TeamRepository,
    U: UnitOfWork,
{
    pub fn new(players: Arc<PR>, teams: Arc<TR>, unit_of_work: Arc<U>) -> Self {
        Self {
            players,
            teams,
            engine: TransferEngine::new(unit_of_work),
        }
    }

    // Players

    pub async fn get_player(&self, id: &PlayerId) -> Result<Player, AppError> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or_else(|| player_not_found(id).into())
    }

    pub async fn list_players_by_team(
        &self,
        team_id: &TeamId,
        page: PageRequest,
    ) -> Result<Page<Player>, AppError> {
        Ok(self.players.find_by_team(team_id, page).await?)
    }

    /// Create a player. `requested_id` is whatever id the caller sent along;
    /// ids are assigned by the store, so any value is a conflict.
    pub async fn create_player(
        &self,
        requested_id: Option<PlayerId>,
        details: PlayerDetails,
    ) -> Result<Player, AppError> {
        if let Some(id) = requested_id {
            return Err(DomainError::Conflict(format!(
                "Can't save a new player with an existing id {}",
                id
            ))
            .into());
        }

        details.validate(Utc::now().date_naive())?;
        if let Some(team_id) = &details.team_id {
            self.require_team(team_id).await?;
        }

        let player = self.players.create(&details).await?;
        tracing::info!(player_id = %player.id, team_id = ?player.team_id, "Player created");
        Ok(player)
    }

    /// Replace every mutable field of a player.
    ///
    /// The team reference may be repeated but not changed here; team moves go
    /// through [`assign_player_to_team`](Self::assign_player_to_team) and
    /// [`transfer_player`](Self::transfer_player).
    pub async fn update_player(
        &self,
        id: &PlayerId,
        details: PlayerDetails,
    ) -> Result<Player, AppError> {
        details.validate(Utc::now().date_naive())?;

        if let Some(team_id) = &details.team_id {
            self.require_team(team_id).await?;
        }

        self.engine.update_player(id, details).await
    }

    pub async fn delete_player(&self, id: &PlayerId) -> Result<(), AppError> {
        if !self.players.exists_by_id(id).await? {
            return Err(player_not_found(id).into());
        }

        self.players.delete_by_id(id).await?;
        tracing::info!(player_id = %id, "Player deleted");
        Ok(())
    }

    /// Put an unassigned player on a team
    pub async fn assign_player_to_team(
        &self,
        player_id: &PlayerId,
        team_id: &TeamId,
    ) -> Result<Player, AppError> {
        self.engine
            .assign_unassigned_player(player_id, team_id)
            .await
    }

    /// Sell a player to another team
    pub async fn transfer_player(
        &self,
        player_id: &PlayerId,
        buying_team_id: &TeamId,
    ) -> Result<TransferOutcome, AppError> {
        self.engine.transfer_player(player_id, buying_team_id).await
    }

    // Teams

    pub async fn get_team(&self, id: &TeamId) -> Result<Team, AppError> {
        Ok(self.require_team(id).await?)
    }

    pub async fn list_teams(&self, page: PageRequest) -> Result<Page<Team>, AppError> {
        Ok(self.teams.find_all(page).await?)
    }

    /// Create a team. Any caller-supplied id is a conflict.
    pub async fn create_team(
        &self,
        requested_id: Option<TeamId>,
        details: TeamDetails,
    ) -> Result<Team, AppError> {
        if let Some(id) = requested_id {
            return Err(DomainError::Conflict(format!(
                "Can't save a new team with an existing id {}",
                id
            ))
            .into());
        }

        details.validate()?;

        let team = self.teams.create(&details).await?;
        tracing::info!(team_id = %team.id, name = %team.name, "Team created");
        Ok(team)
    }

    /// Replace every mutable field of a team, budget included
    pub async fn update_team(&self, id: &TeamId, details: TeamDetails) -> Result<Team, AppError> {
        details.validate()?;

        if !self.teams.exists_by_id(id).await? {
            return Err(team_not_found(id).into());
        }

        let team = self.teams.update(&Team::from_details(*id, details)).await?;
        tracing::debug!(team_id = %team.id, "Team updated");
        Ok(team)
    }

    /// Delete a team that no player references any more
    pub async fn delete_team(&self, id: &TeamId) -> Result<(), AppError> {
        if !self.teams.exists_by_id(id).await? {
            return Err(team_not_found(id).into());
        }

        let assigned = self.players.count_by_team(id).await?;
        if assigned > 0 {
            return Err(DomainError::Conflict(format!(
                "Team {} still has {} player(s)",
                id, assigned
            ))
            .into());
        }

        self.teams.delete_by_id(id).await?;
        tracing::info!(team_id = %id, "Team deleted");
        Ok(())
    }

    async fn require_team(&self, id: &TeamId) -> Result<Team, DomainError> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }
}

fn player_not_found(id: &PlayerId) -> DomainError {
    DomainError::NotFound(format!("No player present with id {}", id))
}

fn team_not_found(id: &TeamId) -> DomainError {
    DomainError::NotFound(format!("No team present with id {}", id))
}
