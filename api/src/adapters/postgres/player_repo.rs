//! PostgreSQL adapter for PlayerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{Page, PageRequest, Player, PlayerDetails, PlayerId, TeamId};
use crate::domain::ports::PlayerRepository;
use crate::entity::players;
use crate::error::DomainError;

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    db: DatabaseConnection,
}

impl PostgresPlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn find_by_id(&self, id: &PlayerId) -> Result<Option<Player>, DomainError> {
        let result = players::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_id(&self, id: &PlayerId) -> Result<bool, DomainError> {
        let count = players::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, player: &PlayerDetails) -> Result<Player, DomainError> {
        let player = Player::from_details(PlayerId::new(), player.clone());

        let result = active_model(&player)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &PlayerId) -> Result<(), DomainError> {
        players::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_team(
        &self,
        team_id: &TeamId,
        page: PageRequest,
    ) -> Result<Page<Player>, DomainError> {
        let total = self.count_by_team(team_id).await?;

        let results = players::Entity::find()
            .filter(players::Column::TeamId.eq(team_id.0))
            .order_by_asc(players::Column::Id)
            .offset(page.offset())
            .limit(page.size)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Page::new(
            results.into_iter().map(|m| m.into()).collect(),
            page,
            total,
        ))
    }

    async fn count_by_team(&self, team_id: &TeamId) -> Result<u64, DomainError> {
        players::Entity::find()
            .filter(players::Column::TeamId.eq(team_id.0))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Active model with every column set, for inserts and full updates
pub(super) fn active_model(player: &Player) -> players::ActiveModel {
    players::ActiveModel {
        id: Set(player.id.0),
        first_name: Set(player.first_name.clone()),
        last_name: Set(player.last_name.clone()),
        birth_date: Set(player.birth_date),
        career_start_date: Set(player.career_start_date),
        team_id: Set(player.team_id.map(|t| t.0)),
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Player {
            id: PlayerId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            birth_date: model.birth_date,
            career_start_date: model.career_start_date,
            team_id: model.team_id.map(TeamId),
        }
    }
}
