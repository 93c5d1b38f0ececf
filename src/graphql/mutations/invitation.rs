use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Invitation, NewInvitation};

#[derive(Default)]
pub struct InvitationMutation;

#[Object]
impl InvitationMutation {
    async fn create_invitation(
        &self,
        ctx: &Context<'_>,
        param: NewInvitation,
    ) -> Result<Invitation> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .invitations
            .create_invitation(param)
            .await
            .to_graphql_result()
    }

    /// Join the invitation's team. The invitation is consumed only when the
    /// user was moved.
    async fn accept_invitation(&self, ctx: &Context<'_>, invitation_id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .invitations
            .accept_invitation(&invitation_id)
            .await
            .to_graphql_result()
    }

    async fn reject_invitation(&self, ctx: &Context<'_>, invitation_id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .invitations
            .reject_invitation(&invitation_id)
            .await
            .to_graphql_result()
    }
}
