//! Escape, Speed, Humanity and Discovery score records.
//!
//! Each team has at most one record of every kind (`team_id` is unique), so
//! reads and upserts are keyed by team. Upserts are a single
//! `INSERT .. ON CONFLICT (team_id) DO UPDATE` statement, which needs no
//! transaction and cannot race another upsert for the same team.

use chrono::Utc;
use sea_orm::{
    sea_query::{IntoIden, OnConflict},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::database::entities::{discoveries, escapes, humanities, speeds};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{
    Discovery, Escape, Humanity, Speed, UpsertDiscoveryInput, UpsertEscapeInput,
    UpsertHumanityInput, UpsertSpeedInput,
};
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct ScoreService {
    db: DatabaseConnection,
}

impl ScoreService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_team_escape(&self, team_id: &str) -> ApiResult<Escape> {
        escapes::Entity::find()
            .filter(escapes::Column::TeamId.eq(team_id))
            .one(&self.db)
            .await?
            .map(Escape::from)
            .ok_or_else(|| ApiError::not_found("Escape", team_id))
    }

    pub async fn get_team_speed(&self, team_id: &str) -> ApiResult<Speed> {
        speeds::Entity::find()
            .filter(speeds::Column::TeamId.eq(team_id))
            .one(&self.db)
            .await?
            .map(Speed::from)
            .ok_or_else(|| ApiError::not_found("Speed", team_id))
    }

    pub async fn get_many_speed(&self, page: Pagination) -> ApiResult<Vec<Speed>> {
        let speeds = QuerySpec::<speeds::Entity>::new()
            .chronological(speeds::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(speeds.into_iter().map(Speed::from).collect())
    }

    pub async fn get_team_humanity(&self, team_id: &str) -> ApiResult<Humanity> {
        humanities::Entity::find()
            .filter(humanities::Column::TeamId.eq(team_id))
            .one(&self.db)
            .await?
            .map(Humanity::from)
            .ok_or_else(|| ApiError::not_found("Humanity", team_id))
    }

    pub async fn get_many_humanity(&self, page: Pagination) -> ApiResult<Vec<Humanity>> {
        let humanities = QuerySpec::<humanities::Entity>::new()
            .chronological(humanities::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(humanities.into_iter().map(Humanity::from).collect())
    }

    pub async fn get_team_discovery(&self, team_id: &str) -> ApiResult<Discovery> {
        discoveries::Entity::find()
            .filter(discoveries::Column::TeamId.eq(team_id))
            .one(&self.db)
            .await?
            .map(Discovery::from)
            .ok_or_else(|| ApiError::not_found("Discovery", team_id))
    }

    pub async fn upsert_escape(&self, param: UpsertEscapeInput) -> ApiResult<Escape> {
        let mut columns = vec![escapes::Column::UpdatedAt];
        supplied(&mut columns, escapes::Column::MissionOne, param.mission_one.is_some());
        supplied(&mut columns, escapes::Column::MissionTwo, param.mission_two.is_some());
        supplied(&mut columns, escapes::Column::MissionThree, param.mission_three.is_some());

        let team_id = String::from(param.team_id);
        let now = Utc::now();
        let record = escapes::ActiveModel {
            id: Set(new_id()),
            team_id: Set(team_id.clone()),
            mission_one: Set(param.mission_one.unwrap_or(false)),
            mission_two: Set(param.mission_two.unwrap_or(false)),
            mission_three: Set(param.mission_three.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        escapes::Entity::insert(record)
            .on_conflict(on_team(escapes::Column::TeamId, columns))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Upserted escape record for team {}", team_id);
        self.get_team_escape(&team_id).await
    }

    pub async fn upsert_speed(&self, param: UpsertSpeedInput) -> ApiResult<Speed> {
        let mut columns = vec![speeds::Column::UpdatedAt, speeds::Column::MissionId];
        supplied(&mut columns, speeds::Column::Answer, !param.answer.is_undefined());
        supplied(&mut columns, speeds::Column::Points, param.points.is_some());
        supplied(&mut columns, speeds::Column::CompletedAt, !param.completed_at.is_undefined());

        let team_id = String::from(param.team_id);
        let now = Utc::now();
        let record = speeds::ActiveModel {
            id: Set(new_id()),
            team_id: Set(team_id.clone()),
            mission_id: Set(param.mission_id.into()),
            answer: Set(param.answer.take()),
            points: Set(param.points.unwrap_or(0.0)),
            completed_at: Set(param.completed_at.take()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        speeds::Entity::insert(record)
            .on_conflict(on_team(speeds::Column::TeamId, columns))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Upserted speed record for team {}", team_id);
        self.get_team_speed(&team_id).await
    }

    pub async fn upsert_humanity(&self, param: UpsertHumanityInput) -> ApiResult<Humanity> {
        let mut columns = vec![humanities::Column::UpdatedAt, humanities::Column::MissionId];
        supplied(
            &mut columns,
            humanities::Column::SubmissionUrl,
            !param.submission_url.is_undefined(),
        );
        supplied(&mut columns, humanities::Column::Points, param.points.is_some());

        let team_id = String::from(param.team_id);
        let now = Utc::now();
        let record = humanities::ActiveModel {
            id: Set(new_id()),
            team_id: Set(team_id.clone()),
            mission_id: Set(param.mission_id.into()),
            submission_url: Set(param.submission_url.take()),
            points: Set(param.points.unwrap_or(0.0)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        humanities::Entity::insert(record)
            .on_conflict(on_team(humanities::Column::TeamId, columns))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Upserted humanity record for team {}", team_id);
        self.get_team_humanity(&team_id).await
    }

    pub async fn upsert_discovery(&self, param: UpsertDiscoveryInput) -> ApiResult<Discovery> {
        let mut columns = vec![discoveries::Column::UpdatedAt, discoveries::Column::MissionId];
        supplied(&mut columns, discoveries::Column::Found, param.found.is_some());
        supplied(&mut columns, discoveries::Column::Points, param.points.is_some());

        let team_id = String::from(param.team_id);
        let now = Utc::now();
        let record = discoveries::ActiveModel {
            id: Set(new_id()),
            team_id: Set(team_id.clone()),
            mission_id: Set(param.mission_id.into()),
            found: Set(param.found.unwrap_or(0)),
            points: Set(param.points.unwrap_or(0.0)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        discoveries::Entity::insert(record)
            .on_conflict(on_team(discoveries::Column::TeamId, columns))
            .exec_without_returning(&self.db)
            .await?;

        debug!("Upserted discovery record for team {}", team_id);
        self.get_team_discovery(&team_id).await
    }
}

fn supplied<C>(columns: &mut Vec<C>, column: C, present: bool) {
    if present {
        columns.push(column);
    }
}

/// Insert-or-update keyed by the record's unique `team_id`. On conflict only
/// `columns` are overwritten; the rest of the existing row is kept.
fn on_team<C: IntoIden + 'static>(team_id: C, columns: Vec<C>) -> OnConflict {
    OnConflict::column(team_id)
        .update_columns(columns)
        .to_owned()
}
