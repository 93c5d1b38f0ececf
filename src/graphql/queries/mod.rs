use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{
    BattlegroundRoom, BattlegroundRound, Cluster, Discovery, Escape, Humanity, Invitation,
    Mission, PaginationInput, Post, Speed, Team, User,
};

pub struct Query;

#[Object]
impl Query {
    async fn user(&self, ctx: &Context<'_>, user_id: ID) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context.users.get_unique_user(&user_id).await.to_graphql_result()
    }

    async fn users(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_many_user(context.page(page))
            .await
            .to_graphql_result()
    }

    /// Total number of registered users
    async fn user_count(&self, ctx: &Context<'_>) -> Result<u64> {
        let context = ctx.data::<GraphQLContext>()?;
        context.users.count_users().await.to_graphql_result()
    }

    async fn team(&self, ctx: &Context<'_>, team_id: ID) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context.teams.get_unique_team(&team_id).await.to_graphql_result()
    }

    async fn teams(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Team>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_many_team(context.page(page))
            .await
            .to_graphql_result()
    }

    async fn team_count(&self, ctx: &Context<'_>) -> Result<u64> {
        let context = ctx.data::<GraphQLContext>()?;
        context.teams.count_teams().await.to_graphql_result()
    }

    /// Escape record of a team
    async fn escape(&self, ctx: &Context<'_>, team_id: ID) -> Result<Escape> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.get_team_escape(&team_id).await.to_graphql_result()
    }

    async fn speed(&self, ctx: &Context<'_>, team_id: ID) -> Result<Speed> {
        let context = ctx.data::<GraphQLContext>()?;
        context.scores.get_team_speed(&team_id).await.to_graphql_result()
    }

    async fn speeds(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Speed>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .scores
            .get_many_speed(context.page(page))
            .await
            .to_graphql_result()
    }

    async fn humanity(&self, ctx: &Context<'_>, team_id: ID) -> Result<Humanity> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .scores
            .get_team_humanity(&team_id)
            .await
            .to_graphql_result()
    }

    async fn humanities(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Humanity>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .scores
            .get_many_humanity(context.page(page))
            .await
            .to_graphql_result()
    }

    async fn discovery(&self, ctx: &Context<'_>, team_id: ID) -> Result<Discovery> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .scores
            .get_team_discovery(&team_id)
            .await
            .to_graphql_result()
    }

    async fn cluster(&self, ctx: &Context<'_>, cluster_id: ID) -> Result<Cluster> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .clusters
            .get_unique_cluster(&cluster_id)
            .await
            .to_graphql_result()
    }

    async fn mission(&self, ctx: &Context<'_>, mission_id: ID) -> Result<Mission> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .missions
            .get_unique_mission(&mission_id)
            .await
            .to_graphql_result()
    }

    async fn missions(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Mission>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .missions
            .get_many_mission(context.page(page))
            .await
            .to_graphql_result()
    }

    async fn battleground_room(&self, ctx: &Context<'_>, code: String) -> Result<BattlegroundRoom> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .get_unique_room(&code)
            .await
            .to_graphql_result()
    }

    async fn battleground_rooms(
        &self,
        ctx: &Context<'_>,
        page: PaginationInput,
    ) -> Result<Vec<BattlegroundRoom>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .get_many_room(context.page(page))
            .await
            .to_graphql_result()
    }

    /// Not available yet; always fails with `NOT_IMPLEMENTED`
    async fn battleground_round(
        &self,
        ctx: &Context<'_>,
        code: String,
        round: i32,
    ) -> Result<BattlegroundRound> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .get_round(&code, round)
            .await
            .to_graphql_result()
    }

    async fn post(&self, ctx: &Context<'_>, post_id: ID) -> Result<Post> {
        let context = ctx.data::<GraphQLContext>()?;
        context.posts.get_unique_post(&post_id).await.to_graphql_result()
    }

    async fn posts(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .posts
            .get_many_post(context.page(page))
            .await
            .to_graphql_result()
    }

    /// Pending invitations addressed to a user
    async fn invitations(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        page: PaginationInput,
    ) -> Result<Vec<Invitation>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .invitations
            .get_many_user_invitations(context.page(page), &user_id)
            .await
            .to_graphql_result()
    }
}
