//! PostgreSQL adapter for UnitOfWork
//!
//! Each transaction wraps a SeaORM `DatabaseTransaction`. Locks are row locks
//! taken with `SELECT ... FOR UPDATE`, released on commit or rollback.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QuerySelect,
    TransactionTrait,
};

use super::{player_repo, team_repo};
use crate::domain::entities::{Player, PlayerId, Team, TeamId};
use crate::domain::ports::{RosterTransaction, UnitOfWork};
use crate::entity::{players, teams};
use crate::error::DomainError;

/// PostgreSQL implementation of UnitOfWork
pub struct PostgresUnitOfWork {
    db: DatabaseConnection,
}

impl PostgresUnitOfWork {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    type Transaction = PostgresRosterTransaction;

    async fn begin(&self) -> Result<Self::Transaction, DomainError> {
        let tx = self.db.begin().await?;
        Ok(PostgresRosterTransaction { tx })
    }
}

/// An open database transaction. Dropping it without commit rolls back.
pub struct PostgresRosterTransaction {
    tx: DatabaseTransaction,
}

#[async_trait]
impl RosterTransaction for PostgresRosterTransaction {
    async fn lock_player(&mut self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        let result = players::Entity::find_by_id(id.0)
            .lock_exclusive()
            .one(&self.tx)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn lock_team(&mut self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let result = teams::Entity::find_by_id(id.0)
            .lock_exclusive()
            .one(&self.tx)
            .await?;

        Ok(result.map(|m| m.into()))
    }

    async fn save_player(&mut self, player: &Player) -> Result<Player, DomainError> {
        let result = player_repo::active_model(player)
            .update(&self.tx)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::NotFound(format!("Player {}", player.id)),
                e => e.into(),
            })?;

        Ok(result.into())
    }

    async fn save_team(&mut self, team: &Team) -> Result<Team, DomainError> {
        let result = team_repo::active_model(team)
            .update(&self.tx)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::NotFound(format!("Team {}", team.id)),
                e => e.into(),
            })?;

        Ok(result.into())
    }

    async fn commit(self) -> Result<(), DomainError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), DomainError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
