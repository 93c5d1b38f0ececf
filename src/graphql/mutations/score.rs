use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{
    Discovery, Escape, Humanity, Speed, UpsertDiscoveryInput, UpsertEscapeInput,
    UpsertHumanityInput, UpsertSpeedInput,
};

#[derive(Default)]
pub struct ScoreMutation;

#[Object]
impl ScoreMutation {
    async fn upsert_escape(&self, ctx: &Context<'_>, param: UpsertEscapeInput) -> Result<Escape> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.upsert_escape(param).await.to_graphql_result()
    }

    async fn upsert_speed(&self, ctx: &Context<'_>, param: UpsertSpeedInput) -> Result<Speed> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.upsert_speed(param).await.to_graphql_result()
    }

    async fn upsert_humanity(
        &self,
        ctx: &Context<'_>,
        param: UpsertHumanityInput,
    ) -> Result<Humanity> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.upsert_humanity(param).await.to_graphql_result()
    }

    async fn upsert_discovery(
        &self,
        ctx: &Context<'_>,
        param: UpsertDiscoveryInput,
    ) -> Result<Discovery> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.upsert_discovery(param).await.to_graphql_result()
    }
}
