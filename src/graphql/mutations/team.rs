use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{NewTeam, Team, UpdateTeamInput};

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    async fn create_team(&self, ctx: &Context<'_>, param: NewTeam) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context.teams.create_team(param).await.to_graphql_result()
    }

    async fn update_team(
        &self,
        ctx: &Context<'_>,
        team_id: ID,
        param: UpdateTeamInput,
    ) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .update_unique_team(&team_id, param)
            .await
            .to_graphql_result()
    }

    /// Mark a mission as completed by a team and award its points
    async fn complete_mission(
        &self,
        ctx: &Context<'_>,
        team_id: ID,
        mission_id: ID,
    ) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .complete_mission(&team_id, &mission_id)
            .await
            .to_graphql_result()
    }
}
