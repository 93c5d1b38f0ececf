use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::database::entities::{missions, team_missions, teams};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{NewTeam, Team, UpdateTeamInput};
use crate::services::patch::{patch, patch_nullable};
use crate::services::row_lock::claim_row;
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct TeamService {
    db: DatabaseConnection,
}

impl TeamService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_team(&self, team_id: &str) -> ApiResult<Team> {
        teams::Entity::find_by_id(team_id)
            .one(&self.db)
            .await?
            .map(Team::from)
            .ok_or_else(|| ApiError::not_found("Team", team_id))
    }

    pub async fn get_many_team(&self, page: Pagination) -> ApiResult<Vec<Team>> {
        self.find_many(QuerySpec::new().page(page)).await
    }

    pub async fn get_many_cluster_teams(
        &self,
        page: Pagination,
        cluster_id: &str,
    ) -> ApiResult<Vec<Team>> {
        self.find_many(
            QuerySpec::new()
                .filter(teams::Column::ClusterId.eq(cluster_id))
                .page(page),
        )
        .await
    }

    /// Teams with a completion record for the mission
    pub async fn get_many_completed_mission(
        &self,
        page: Pagination,
        mission_id: &str,
    ) -> ApiResult<Vec<Team>> {
        let completed = Query::select()
            .column(team_missions::Column::TeamId)
            .from(team_missions::Entity)
            .and_where(team_missions::Column::MissionId.eq(mission_id))
            .to_owned();

        self.find_many(
            QuerySpec::new()
                .filter(teams::Column::Id.in_subquery(completed))
                .page(page),
        )
        .await
    }

    async fn find_many(&self, spec: QuerySpec<teams::Entity>) -> ApiResult<Vec<Team>> {
        let teams = spec
            .chronological(teams::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from).collect())
    }

    pub async fn count_teams(&self) -> ApiResult<u64> {
        Ok(QuerySpec::<teams::Entity>::new().count(&self.db).await?)
    }

    /// New teams always start with zero points and no powercard.
    pub async fn create_team(&self, param: NewTeam) -> ApiResult<Team> {
        let now = Utc::now();
        let team = teams::ActiveModel {
            id: Set(new_id()),
            name: Set(param.name),
            avatar_url: Set(param.avatar_url),
            points: Set(0.0),
            powercard: Set(None),
            cluster_id: Set(param.cluster_id.map(String::from)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!("Created team {} ({})", team.name, team.id);
        Ok(Team::from(team))
    }

    pub async fn update_unique_team(
        &self,
        team_id: &str,
        param: UpdateTeamInput,
    ) -> ApiResult<Team> {
        let team = teams::Entity::find_by_id(team_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ApiError::not_found("Team", team_id))?;

        let mut active: teams::ActiveModel = team.into();
        patch(&mut active.name, param.name);
        patch_nullable(&mut active.avatar_url, param.avatar_url);
        patch(&mut active.points, param.points);
        patch_nullable(&mut active.powercard, param.powercard);
        patch_nullable(&mut active.cluster_id, param.cluster_id.map_value(String::from));
        active.updated_at = Set(Utc::now());

        let team = active.update(&self.db).await?;
        debug!("Updated team {}", team.id);

        Ok(Team::from(team))
    }

    /// Record that a team finished a mission and award the mission's points.
    ///
    /// The team row is claimed before anything is read and the points are
    /// added in SQL, so concurrent completions for one team all count.
    /// Completing the same mission twice violates the completion table's key
    /// and surfaces as a conflict; nothing is awarded in that case.
    pub async fn complete_mission(&self, team_id: &str, mission_id: &str) -> ApiResult<Team> {
        let txn = self.db.begin().await?;

        if !claim_row::<teams::Entity, _>(&txn, teams::Column::Id, teams::Column::UpdatedAt, team_id)
            .await?
        {
            return Err(ApiError::not_found("Team", team_id));
        }

        let mission = missions::Entity::find_by_id(mission_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ApiError::not_found("Mission", mission_id))?;

        let completion = team_missions::ActiveModel {
            team_id: Set(team_id.to_string()),
            mission_id: Set(mission.id.clone()),
            created_at: Set(Utc::now()),
        };
        team_missions::Entity::insert(completion)
            .exec_without_returning(&txn)
            .await?;

        teams::Entity::update_many()
            .col_expr(
                teams::Column::Points,
                Expr::col(teams::Column::Points).add(mission.points),
            )
            .filter(teams::Column::Id.eq(team_id))
            .exec(&txn)
            .await?;

        let team = teams::Entity::find_by_id(team_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ApiError::not_found("Team", team_id))?;

        txn.commit().await?;
        info!(
            "Team {} completed mission {} (+{} points)",
            team.id, mission.slug, mission.points
        );

        Ok(Team::from(team))
    }
}
