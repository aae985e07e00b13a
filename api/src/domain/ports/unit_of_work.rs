//! Unit of work port
//!
//! Transfers and assignments read and write several records that must change
//! together. A `RosterTransaction` stages those writes; nothing becomes visible
//! to other callers until `commit` succeeds. Dropping a transaction without
//! committing discards every staged write.

use async_trait::async_trait;

use crate::domain::entities::{Player, PlayerId, Team, TeamId};
use crate::error::DomainError;

/// Opens transactions over the player and team stores
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Transaction: RosterTransaction;

    /// Begin a new transaction
    async fn begin(&self) -> Result<Self::Transaction, DomainError>;
}

/// A single all-or-nothing transaction over players and teams
#[async_trait]
pub trait RosterTransaction: Send {
    /// Load a player and hold an exclusive lock on it until commit/rollback
    async fn lock_player(&mut self, id: &PlayerId) -> Result<Option<Player>, DomainError>;

    /// Load a team and hold an exclusive lock on it until commit/rollback.
    /// Callers locking several teams must do so in ascending ID order.
    async fn lock_team(&mut self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Stage the full record of an existing player
    async fn save_player(&mut self, player: &Player) -> Result<Player, DomainError>;

    /// Stage the full record of an existing team
    async fn save_team(&mut self, team: &Team) -> Result<Team, DomainError>;

    /// Make every staged write durable at once
    async fn commit(self) -> Result<(), DomainError>;

    /// Discard every staged write
    async fn rollback(self) -> Result<(), DomainError>;
}
