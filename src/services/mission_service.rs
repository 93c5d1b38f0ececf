use sea_orm::{sea_query::Query, ColumnTrait, DatabaseConnection, EntityTrait};

use crate::database::entities::{missions, team_missions};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::Mission;
use crate::services::{Pagination, QuerySpec};

#[derive(Clone)]
pub struct MissionService {
    db: DatabaseConnection,
}

impl MissionService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_mission(&self, mission_id: &str) -> ApiResult<Mission> {
        missions::Entity::find_by_id(mission_id)
            .one(&self.db)
            .await?
            .map(Mission::from)
            .ok_or_else(|| ApiError::not_found("Mission", mission_id))
    }

    pub async fn get_many_mission(&self, page: Pagination) -> ApiResult<Vec<Mission>> {
        self.find_many(QuerySpec::new().page(page)).await
    }

    /// Missions the team has a completion record for
    pub async fn get_many_completed_by_team(
        &self,
        page: Pagination,
        team_id: &str,
    ) -> ApiResult<Vec<Mission>> {
        let completed = Query::select()
            .column(team_missions::Column::MissionId)
            .from(team_missions::Entity)
            .and_where(team_missions::Column::TeamId.eq(team_id))
            .to_owned();

        self.find_many(
            QuerySpec::new()
                .filter(missions::Column::Id.in_subquery(completed))
                .page(page),
        )
        .await
    }

    async fn find_many(&self, spec: QuerySpec<missions::Entity>) -> ApiResult<Vec<Mission>> {
        let missions = spec
            .chronological(missions::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(missions.into_iter().map(Mission::from).collect())
    }
}
