use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::{clusters, teams, BattlegroundEffect};
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Mission, PaginationInput, User};
use crate::services::Pagination;

/// Teams listed under a cluster
const CLUSTER_TEAMS_LIMIT: u64 = 50;
const TEAM_MEMBERS_LIMIT: u64 = 100;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Team {
    pub id: ID,
    pub name: String,
    pub avatar_url: Option<String>,
    pub points: f64,
    pub powercard: Option<BattlegroundEffect>,
    #[graphql(skip)]
    pub cluster_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: ID::from(model.id),
            name: model.name,
            avatar_url: model.avatar_url,
            points: model.points,
            powercard: model.powercard,
            cluster_id: model.cluster_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Team {
    async fn cluster(&self, ctx: &Context<'_>) -> Result<Option<Cluster>> {
        let Some(cluster_id) = self.cluster_id.as_deref() else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        context
            .clusters
            .get_unique_cluster(cluster_id)
            .await
            .map(Some)
            .to_graphql_result()
    }

    /// Missions this team has completed
    async fn completed(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Mission>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .missions
            .get_many_completed_by_team(context.page(page), &self.id)
            .await
            .to_graphql_result()
    }

    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_many_team_members(Pagination::first(TEAM_MEMBERS_LIMIT), &self.id)
            .await
            .to_graphql_result()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Cluster {
    pub id: ID,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<clusters::Model> for Cluster {
    fn from(model: clusters::Model) -> Self {
        Self {
            id: ID::from(model.id),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Cluster {
    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_many_cluster_teams(Pagination::first(CLUSTER_TEAMS_LIMIT), &self.id)
            .await
            .to_graphql_result()
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewTeam {
    pub name: String,
    pub avatar_url: Option<String>,
    pub cluster_id: Option<ID>,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UpdateTeamInput {
    pub name: Option<String>,
    pub avatar_url: MaybeUndefined<String>,
    pub points: Option<f64>,
    pub powercard: MaybeUndefined<BattlegroundEffect>,
    pub cluster_id: MaybeUndefined<ID>,
}
