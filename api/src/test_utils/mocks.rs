//! Mock implementations of port traits
//!
//! An [`InMemoryRoster`] owns the player and team tables. Repositories, the
//! unit of work and the router backend all share those tables, so a test can
//! seed data once and then inspect what any layer wrote.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::entities::{
    Page, PageRequest, Player, PlayerDetails, PlayerId, Team, TeamDetails, TeamId,
};
use crate::domain::ports::{PlayerRepository, RosterTransaction, TeamRepository, UnitOfWork};
use crate::error::DomainError;
use crate::Backend;

#[derive(Default)]
struct Tables {
    players: BTreeMap<PlayerId, Player>,
    teams: BTreeMap<TeamId, Team>,
}

#[derive(Default)]
struct Counters {
    player_delete_calls: AtomicUsize,
    team_delete_calls: AtomicUsize,
}

fn page_of<T: Clone>(rows: Vec<&T>, request: PageRequest) -> Page<T> {
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.size as usize)
        .cloned()
        .collect();
    Page::new(items, request, total)
}

// ============================================================================
// Shared roster
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryRoster {
    tables: Arc<RwLock<Tables>>,
    /// Held for the whole life of a transaction, serializing them
    gate: Arc<Mutex<()>>,
    fail_player_writes: Arc<AtomicBool>,
    counters: Arc<Counters>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a team for testing
    pub fn with_team(self, team: Team) -> Self {
        self.tables.write().unwrap().teams.insert(team.id, team);
        self
    }

    /// Pre-populate with a player for testing
    pub fn with_player(self, player: Player) -> Self {
        self.tables
            .write()
            .unwrap()
            .players
            .insert(player.id, player);
        self
    }

    /// Make every player write inside a transaction fail with a database error
    pub fn with_failing_player_writes(self) -> Self {
        self.fail_player_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn players(&self) -> InMemoryPlayerRepository {
        InMemoryPlayerRepository {
            roster: self.clone(),
        }
    }

    pub fn teams(&self) -> InMemoryTeamRepository {
        InMemoryTeamRepository {
            roster: self.clone(),
        }
    }

    pub fn unit_of_work(&self) -> InMemoryUnitOfWork {
        InMemoryUnitOfWork {
            roster: self.clone(),
        }
    }

    /// Committed state of a player
    pub fn player(&self, id: &PlayerId) -> Option<Player> {
        self.tables.read().unwrap().players.get(id).cloned()
    }

    /// Committed state of a team
    pub fn team(&self, id: &TeamId) -> Option<Team> {
        self.tables.read().unwrap().teams.get(id).cloned()
    }

    pub fn player_count(&self) -> usize {
        self.tables.read().unwrap().players.len()
    }

    /// Number of `delete_by_id` calls on the player repository, hit or miss
    pub fn player_delete_calls(&self) -> usize {
        self.counters.player_delete_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete_by_id` calls on the team repository, hit or miss
    pub fn team_delete_calls(&self) -> usize {
        self.counters.team_delete_calls.load(Ordering::SeqCst)
    }
}

// ============================================================================
// In-Memory Player Repository
// ============================================================================

pub struct InMemoryPlayerRepository {
    roster: InMemoryRoster,
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.roster.player(id))
    }

    async fn exists_by_id(&self, id: &PlayerId) -> Result<bool, DomainError> {
        let tables = self.roster.tables.read().unwrap();
        Ok(tables.players.contains_key(id))
    }

    async fn create(&self, details: &PlayerDetails) -> Result<Player, DomainError> {
        let player = Player::from_details(PlayerId::new(), details.clone());
        let mut tables = self.roster.tables.write().unwrap();
        tables.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn delete_by_id(&self, id: &PlayerId) -> Result<(), DomainError> {
        self.roster
            .counters
            .player_delete_calls
            .fetch_add(1, Ordering::SeqCst);
        self.roster.tables.write().unwrap().players.remove(id);
        Ok(())
    }

    async fn find_by_team(
        &self,
        team_id: &TeamId,
        page: PageRequest,
    ) -> Result<Page<Player>, DomainError> {
        let tables = self.roster.tables.read().unwrap();
        let rows = tables
            .players
            .values()
            .filter(|p| p.team_id.as_ref() == Some(team_id))
            .collect();
        Ok(page_of(rows, page))
    }

    async fn count_by_team(&self, team_id: &TeamId) -> Result<u64, DomainError> {
        let tables = self.roster.tables.read().unwrap();
        Ok(tables
            .players
            .values()
            .filter(|p| p.team_id.as_ref() == Some(team_id))
            .count() as u64)
    }
}

// ============================================================================
// In-Memory Team Repository
// ============================================================================

pub struct InMemoryTeamRepository {
    roster: InMemoryRoster,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self.roster.team(id))
    }

    async fn exists_by_id(&self, id: &TeamId) -> Result<bool, DomainError> {
        let tables = self.roster.tables.read().unwrap();
        Ok(tables.teams.contains_key(id))
    }

    async fn create(&self, details: &TeamDetails) -> Result<Team, DomainError> {
        let team = Team::from_details(TeamId::new(), details.clone());
        let mut tables = self.roster.tables.write().unwrap();
        tables.teams.insert(team.id, team.clone());
        Ok(team)
    }

    async fn update(&self, team: &Team) -> Result<Team, DomainError> {
        let mut tables = self.roster.tables.write().unwrap();
        match tables.teams.get_mut(&team.id) {
            Some(stored) => {
                *stored = team.clone();
                Ok(team.clone())
            }
            None => Err(DomainError::NotFound(format!("Team {}", team.id))),
        }
    }

    async fn delete_by_id(&self, id: &TeamId) -> Result<(), DomainError> {
        self.roster
            .counters
            .team_delete_calls
            .fetch_add(1, Ordering::SeqCst);
        self.roster.tables.write().unwrap().teams.remove(id);
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Team>, DomainError> {
        let tables = self.roster.tables.read().unwrap();
        Ok(page_of(tables.teams.values().collect(), page))
    }
}

// ============================================================================
// In-Memory Unit of Work
// ============================================================================

pub struct InMemoryUnitOfWork {
    roster: InMemoryRoster,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    type Transaction = InMemoryRosterTransaction;

    async fn begin(&self) -> Result<Self::Transaction, DomainError> {
        let gate = self.roster.gate.clone().lock_owned().await;
        Ok(InMemoryRosterTransaction {
            _gate: gate,
            roster: self.roster.clone(),
            players: BTreeMap::new(),
            teams: BTreeMap::new(),
        })
    }
}

/// Stages writes until commit; dropping it discards them
pub struct InMemoryRosterTransaction {
    _gate: OwnedMutexGuard<()>,
    roster: InMemoryRoster,
    players: BTreeMap<PlayerId, Player>,
    teams: BTreeMap<TeamId, Team>,
}

#[async_trait]
impl RosterTransaction for InMemoryRosterTransaction {
    async fn lock_player(&mut self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self
            .players
            .get(id)
            .cloned()
            .or_else(|| self.roster.player(id)))
    }

    async fn lock_team(&mut self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self.teams.get(id).cloned().or_else(|| self.roster.team(id)))
    }

    async fn save_player(&mut self, player: &Player) -> Result<Player, DomainError> {
        if self.roster.fail_player_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Database("player write failed".to_string()));
        }
        if self.roster.player(&player.id).is_none() {
            return Err(DomainError::NotFound(format!("Player {}", player.id)));
        }
        self.players.insert(player.id, player.clone());
        Ok(player.clone())
    }

    async fn save_team(&mut self, team: &Team) -> Result<Team, DomainError> {
        if self.roster.team(&team.id).is_none() {
            return Err(DomainError::NotFound(format!("Team {}", team.id)));
        }
        self.teams.insert(team.id, team.clone());
        Ok(team.clone())
    }

    async fn commit(self) -> Result<(), DomainError> {
        let mut tables = self.roster.tables.write().unwrap();
        tables.players.extend(self.players);
        tables.teams.extend(self.teams);
        Ok(())
    }

    async fn rollback(self) -> Result<(), DomainError> {
        Ok(())
    }
}

// ============================================================================
// Router backend
// ============================================================================

/// Backend wiring the router to an [`InMemoryRoster`]
pub struct InMemoryBackend;

impl Backend for InMemoryBackend {
    type Players = InMemoryPlayerRepository;
    type Teams = InMemoryTeamRepository;
    type UnitOfWork = InMemoryUnitOfWork;
}
