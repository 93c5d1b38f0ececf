//! Per-team score records for the mission games.
//!
//! Every team owns at most one record of each kind, so the records are looked
//! up and upserted by team id.

use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::{discoveries, escapes, humanities, speeds};
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Mission, Team};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Escape {
    pub id: ID,
    pub mission_one: bool,
    pub mission_two: bool,
    pub mission_three: i32,
    #[graphql(skip)]
    pub team_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<escapes::Model> for Escape {
    fn from(model: escapes::Model) -> Self {
        Self {
            id: ID::from(model.id),
            mission_one: model.mission_one,
            mission_two: model.mission_two,
            mission_three: model.mission_three,
            team_id: model.team_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Escape {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_unique_team(&self.team_id)
            .await
            .to_graphql_result()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Speed {
    pub id: ID,
    pub answer: Option<String>,
    pub points: f64,
    pub completed_at: Option<DateTime<Utc>>,
    #[graphql(skip)]
    pub team_id: String,
    #[graphql(skip)]
    pub mission_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<speeds::Model> for Speed {
    fn from(model: speeds::Model) -> Self {
        Self {
            id: ID::from(model.id),
            answer: model.answer,
            points: model.points,
            completed_at: model.completed_at,
            team_id: model.team_id,
            mission_id: model.mission_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Speed {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        team_of(ctx, &self.team_id).await
    }

    async fn mission(&self, ctx: &Context<'_>) -> Result<Mission> {
        mission_of(ctx, &self.mission_id).await
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Humanity {
    pub id: ID,
    pub submission_url: Option<String>,
    pub points: f64,
    #[graphql(skip)]
    pub team_id: String,
    #[graphql(skip)]
    pub mission_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<humanities::Model> for Humanity {
    fn from(model: humanities::Model) -> Self {
        Self {
            id: ID::from(model.id),
            submission_url: model.submission_url,
            points: model.points,
            team_id: model.team_id,
            mission_id: model.mission_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Humanity {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        team_of(ctx, &self.team_id).await
    }

    async fn mission(&self, ctx: &Context<'_>) -> Result<Mission> {
        mission_of(ctx, &self.mission_id).await
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Discovery {
    pub id: ID,
    /// Number of items the team has found
    pub found: i32,
    pub points: f64,
    #[graphql(skip)]
    pub team_id: String,
    #[graphql(skip)]
    pub mission_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<discoveries::Model> for Discovery {
    fn from(model: discoveries::Model) -> Self {
        Self {
            id: ID::from(model.id),
            found: model.found,
            points: model.points,
            team_id: model.team_id,
            mission_id: model.mission_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Discovery {
    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        team_of(ctx, &self.team_id).await
    }

    async fn mission(&self, ctx: &Context<'_>) -> Result<Mission> {
        mission_of(ctx, &self.mission_id).await
    }
}

async fn team_of(ctx: &Context<'_>, team_id: &str) -> Result<Team> {
    let context = ctx.data::<GraphQLContext>()?;
    context.teams.get_unique_team(team_id).await.to_graphql_result()
}

async fn mission_of(ctx: &Context<'_>, mission_id: &str) -> Result<Mission> {
    let context = ctx.data::<GraphQLContext>()?;
    context
        .missions
        .get_unique_mission(mission_id)
        .await
        .to_graphql_result()
}

#[derive(InputObject, Clone, Debug)]
pub struct UpsertEscapeInput {
    pub team_id: ID,
    pub mission_one: Option<bool>,
    pub mission_two: Option<bool>,
    pub mission_three: Option<i32>,
}

#[derive(InputObject, Clone, Debug)]
pub struct UpsertSpeedInput {
    pub team_id: ID,
    pub mission_id: ID,
    pub answer: MaybeUndefined<String>,
    pub points: Option<f64>,
    pub completed_at: MaybeUndefined<DateTime<Utc>>,
}

#[derive(InputObject, Clone, Debug)]
pub struct UpsertHumanityInput {
    pub team_id: ID,
    pub mission_id: ID,
    pub submission_url: MaybeUndefined<String>,
    pub points: Option<f64>,
}

#[derive(InputObject, Clone, Debug)]
pub struct UpsertDiscoveryInput {
    pub team_id: ID,
    pub mission_id: ID,
    pub found: Option<i32>,
    pub points: Option<f64>,
}
