//! PostgreSQL adapter for TeamRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::domain::entities::{Page, PageRequest, Team, TeamDetails, TeamId};
use crate::domain::ports::TeamRepository;
use crate::entity::teams;
use crate::error::DomainError;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        let result = teams::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_id(&self, id: &TeamId) -> Result<bool, DomainError> {
        let count = teams::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, team: &TeamDetails) -> Result<Team, DomainError> {
        let team = Team::from_details(TeamId::new(), team.clone());

        let result = active_model(&team)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, team: &Team) -> Result<Team, DomainError> {
        let result = active_model(team)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => DomainError::NotFound(format!("Team {}", team.id)),
                e => DomainError::Database(e.to_string()),
            })?;

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: &TeamId) -> Result<(), DomainError> {
        teams::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Team>, DomainError> {
        let total = teams::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let results = teams::Entity::find()
            .order_by_asc(teams::Column::Id)
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
}

/// Active model with every column set, for inserts and full updates
pub(super) fn active_model(team: &Team) -> teams::ActiveModel {
    teams::ActiveModel {
        id: Set(team.id.0),
        name: Set(team.name.clone()),
        transfer_commission_percent: Set(team.transfer_commission_percent),
        budget: Set(team.budget),
    }
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Team {
            id: TeamId(model.id),
            name: model.name,
            transfer_commission_percent: model.transfer_commission_percent,
            budget: model.budget,
        }
    }
}
