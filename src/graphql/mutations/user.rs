use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{NewUser, UpdateUserInput, User};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Register a user with its profile and roles
    async fn create_user(&self, ctx: &Context<'_>, param: NewUser) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context.users.create_user(param).await.to_graphql_result()
    }

    /// Partially update a user; only supplied fields change
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        param: UpdateUserInput,
    ) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .update_unique_user(&user_id, param)
            .await
            .to_graphql_result()
    }
}
