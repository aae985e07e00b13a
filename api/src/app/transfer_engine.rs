//! Transfer engine
//!
//! Owns the only operations that move a player between teams. Every operation
//! runs inside one unit of work: records are locked and loaded fresh, the new
//! state is planned in memory, and all writes are committed together or rolled
//! back together.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::app::transfer_fee::{calculate_transfer_fee, TransferFee};
use crate::domain::entities::{Player, PlayerDetails, PlayerId, Team, TeamId, MAX_BUDGET};
use crate::domain::ports::{RosterTransaction, UnitOfWork};
use crate::error::{AppError, DomainError};

/// New state of every record touched by a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub player: Player,
    pub selling_team: Team,
    pub buying_team: Team,
    pub fee: TransferFee,
}

/// Result of a committed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub player: Player,
    pub selling_team: Team,
    pub buying_team: Team,
    pub fee: TransferFee,
}

/// Assign an unassigned player to `team`.
pub fn plan_assignment(player: &Player, team: &Team) -> Result<Player, DomainError> {
    if let Some(current) = player.team_id {
        return Err(DomainError::PlayerAlreadyOnTeam(format!(
            "Player {} already belongs to team {}",
            player.id, current
        )));
    }

    let mut assigned = player.clone();
    assigned.team_id = Some(team.id);
    Ok(assigned)
}

/// Validate a transfer of `player` to `buying_team` and compute the new state.
///
/// `selling_team` is the team the player currently references, `None` when the
/// player is unassigned. Nothing is mutated when an error is returned.
pub fn plan_transfer(
    player: &Player,
    selling_team: Option<&Team>,
    buying_team: &Team,
    today: NaiveDate,
) -> Result<TransferPlan, DomainError> {
    let selling_team = selling_team.ok_or(DomainError::PlayerHasNoTeam(player.id))?;

    debug_assert_eq!(player.team_id, Some(selling_team.id));

    if selling_team.id == buying_team.id {
        return Err(DomainError::PlayerAlreadyOnTeam(format!(
            "Can't transfer player {} to team {}, the player is already on it",
            player.id, buying_team.id
        )));
    }

    let fee = calculate_transfer_fee(player, selling_team, today)?;

    if buying_team.budget < fee.total {
        return Err(DomainError::InsufficientBudget {
            team_id: buying_team.id,
            budget: buying_team.budget,
            fee: fee.total,
        });
    }

    if selling_team.budget + fee.total > MAX_BUDGET {
        return Err(DomainError::Validation(format!(
            "Transfer fee {} would push the budget of team {} above the maximum of {}",
            fee.total, selling_team.id, MAX_BUDGET
        )));
    }

    let mut buying = buying_team.clone();
    buying.budget -= fee.total;

    let mut selling = selling_team.clone();
    selling.budget += fee.total;

    let mut transferred = player.clone();
    transferred.team_id = Some(buying.id);

    Ok(TransferPlan {
        player: transferred,
        selling_team: selling,
        buying_team: buying,
        fee,
    })
}

/// Executes assignments and transfers atomically
pub struct TransferEngine<U>
where
    U: UnitOfWork,
{
    unit_of_work: Arc<U>,
}

impl<U> TransferEngine<U>
where
    U: UnitOfWork,
{
    pub fn new(unit_of_work: Arc<U>) -> Self {
        Self { unit_of_work }
    }

    /// Put a player without a team on `team_id`
    pub async fn assign_unassigned_player(
        &self,
        player_id: &PlayerId,
        team_id: &TeamId,
    ) -> Result<Player, AppError> {
        let mut tx = self.unit_of_work.begin().await?;

        match assign_in(&mut tx, player_id, team_id).await {
            Ok(player) => {
                tx.commit().await?;
                tracing::info!(
                    player_id = %player.id,
                    team_id = %team_id,
                    "Unassigned player added to team"
                );
                Ok(player)
            }
            Err(e) => {
                discard(tx).await;
                tracing::debug!(player_id = %player_id, team_id = %team_id, error = %e, "Assignment rejected");
                Err(e.into())
            }
        }
    }

    /// Sell a player to `buying_team_id`, moving the fee between both budgets
    pub async fn transfer_player(
        &self,
        player_id: &PlayerId,
        buying_team_id: &TeamId,
    ) -> Result<TransferOutcome, AppError> {
        self.transfer_player_on(player_id, buying_team_id, Utc::now().date_naive())
            .await
    }

    /// Same as [`transfer_player`](Self::transfer_player) with an explicit date
    pub async fn transfer_player_on(
        &self,
        player_id: &PlayerId,
        buying_team_id: &TeamId,
        today: NaiveDate,
    ) -> Result<TransferOutcome, AppError> {
        let mut tx = self.unit_of_work.begin().await?;

        match transfer_in(&mut tx, player_id, buying_team_id, today).await {
            Ok(outcome) => {
                tx.commit().await?;
                tracing::info!(
                    player_id = %outcome.player.id,
                    selling_team_id = %outcome.selling_team.id,
                    buying_team_id = %outcome.buying_team.id,
                    fee = %outcome.fee.total,
                    experience_months = outcome.fee.experience_months,
                    age_years = outcome.fee.age_years,
                    "Player transferred"
                );
                Ok(outcome)
            }
            Err(e) => {
                discard(tx).await;
                tracing::info!(
                    player_id = %player_id,
                    buying_team_id = %buying_team_id,
                    error = %e,
                    "Transfer rejected"
                );
                Err(e.into())
            }
        }
    }

    /// Replace a player's fields while its row is locked.
    ///
    /// The team must match the locked record; a concurrent transfer that
    /// committed first turns this into a `Validation` error.
    pub async fn update_player(
        &self,
        player_id: &PlayerId,
        details: PlayerDetails,
    ) -> Result<Player, AppError> {
        let mut tx = self.unit_of_work.begin().await?;

        match update_in(&mut tx, player_id, details).await {
            Ok(player) => {
                tx.commit().await?;
                tracing::info!(player_id = %player.id, "Player updated");
                Ok(player)
            }
            Err(e) => {
                discard(tx).await;
                tracing::debug!(player_id = %player_id, error = %e, "Update rejected");
                Err(e.into())
            }
        }
    }
}

async fn assign_in<T>(
    tx: &mut T,
    player_id: &PlayerId,
    team_id: &TeamId,
) -> Result<Player, DomainError>
where
    T: RosterTransaction,
{
    let player = tx
        .lock_player(player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))?;
    let team = tx
        .lock_team(team_id)
        .await?
        .ok_or_else(|| team_not_found(team_id))?;

    let assigned = plan_assignment(&player, &team)?;
    tx.save_player(&assigned).await
}

async fn update_in<T>(
    tx: &mut T,
    player_id: &PlayerId,
    details: PlayerDetails,
) -> Result<Player, DomainError>
where
    T: RosterTransaction,
{
    let current = tx
        .lock_player(player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))?;
    if current.team_id != details.team_id {
        return Err(DomainError::Validation(
            "A player's team can only change through add-to-team or transfer".to_string(),
        ));
    }

    tx.save_player(&Player::from_details(*player_id, details)).await
}

async fn transfer_in<T>(
    tx: &mut T,
    player_id: &PlayerId,
    buying_team_id: &TeamId,
    today: NaiveDate,
) -> Result<TransferOutcome, DomainError>
where
    T: RosterTransaction,
{
    let player = tx
        .lock_player(player_id)
        .await?
        .ok_or_else(|| player_not_found(player_id))?;
    if player.is_unassigned() {
        return Err(DomainError::PlayerHasNoTeam(player.id));
    }

    // Lock teams in ascending id order so concurrent transfers can't deadlock
    let mut team_ids = vec![*buying_team_id];
    if let Some(selling_id) = player.team_id {
        if selling_id != *buying_team_id {
            team_ids.push(selling_id);
        }
    }
    team_ids.sort();

    let mut locked: Vec<Team> = Vec::with_capacity(team_ids.len());
    for id in &team_ids {
        if let Some(team) = tx.lock_team(id).await? {
            locked.push(team);
        }
    }
    let find = |id: &TeamId| locked.iter().find(|t| t.id == *id);

    let buying_team = find(buying_team_id).ok_or_else(|| team_not_found(buying_team_id))?;
    let selling_team = match player.team_id {
        Some(id) => Some(find(&id).ok_or_else(|| team_not_found(&id))?),
        None => None,
    };

    let plan = plan_transfer(&player, selling_team, buying_team, today)?;

    let buying_team = tx.save_team(&plan.buying_team).await?;
    let selling_team = tx.save_team(&plan.selling_team).await?;
    let player = tx.save_player(&plan.player).await?;

    Ok(TransferOutcome {
        player,
        selling_team,
        buying_team,
        fee: plan.fee,
    })
}

async fn discard<T>(tx: T)
where
    T: RosterTransaction,
{
    if let Err(e) = tx.rollback().await {
        tracing::error!(error = %e, "Failed to roll back transaction");
    }
}

fn player_not_found(id: &PlayerId) -> DomainError {
    DomainError::NotFound(format!("No player present with id {}", id))
}

fn team_not_found(id: &TeamId) -> DomainError {
    DomainError::NotFound(format!("No team present with id {}", id))
}
