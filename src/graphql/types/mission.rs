use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::missions;
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Team;
use crate::services::Pagination;

const COMPLETED_BY_LIMIT: u64 = 50;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Mission {
    pub id: ID,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub points: f64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<missions::Model> for Mission {
    fn from(model: missions::Model) -> Self {
        Self {
            id: ID::from(model.id),
            title: model.title,
            slug: model.slug,
            description: model.description,
            points: model.points,
            start_at: model.start_at,
            end_at: model.end_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Mission {
    /// Teams that have completed this mission
    async fn completed_by(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_many_completed_mission(Pagination::first(COMPLETED_BY_LIMIT), &self.id)
            .await
            .to_graphql_result()
    }
}
