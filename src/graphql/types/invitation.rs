use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::invitations;
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Team, User};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Invitation {
    pub id: ID,
    #[graphql(skip)]
    pub team_id: String,
    #[graphql(skip)]
    pub user_id: String,
    #[graphql(skip)]
    pub from_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<invitations::Model> for Invitation {
    fn from(model: invitations::Model) -> Self {
        Self {
            id: ID::from(model.id),
            team_id: model.team_id,
            user_id: model.user_id,
            from_id: model.from_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Invitation {
    /// The inviting user, null for system generated invitations
    #[graphql(name = "from")]
    async fn inviter(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(from_id) = self.from_id.as_deref() else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_unique_user(from_id)
            .await
            .map(Some)
            .to_graphql_result()
    }

    /// The invited user
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_unique_user(&self.user_id)
            .await
            .to_graphql_result()
    }

    async fn team(&self, ctx: &Context<'_>) -> Result<Team> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_unique_team(&self.team_id)
            .await
            .to_graphql_result()
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewInvitation {
    pub team_id: ID,
    /// The invited user
    pub to: ID,
    /// The inviting user
    pub from: Option<ID>,
}
