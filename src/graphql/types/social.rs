use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::{comments, posts};
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{PaginationInput, User};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub content: String,
    pub image_url: Option<String>,
    #[graphql(skip)]
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: ID::from(model.id),
            content: model.content,
            image_url: model.image_url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Post {
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_unique_user(&self.user_id)
            .await
            .to_graphql_result()
    }

    async fn likes(&self, ctx: &Context<'_>) -> Result<u64> {
        let context = ctx.data::<GraphQLContext>()?;
        context.posts.count_post_likes(&self.id).await.to_graphql_result()
    }

    /// Whether the given user has liked this post
    async fn liked(&self, ctx: &Context<'_>, user_id: ID) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .posts
            .is_post_liked(&self.id, &user_id)
            .await
            .to_graphql_result()
    }

    async fn comments(&self, ctx: &Context<'_>, page: PaginationInput) -> Result<Vec<Comment>> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .comments
            .get_many_post_comments(context.page(page), &self.id)
            .await
            .to_graphql_result()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub content: String,
    #[graphql(skip)]
    pub user_id: String,
    #[graphql(skip)]
    pub post_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Self {
            id: ID::from(model.id),
            content: model.content,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Comment {
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_unique_user(&self.user_id)
            .await
            .to_graphql_result()
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .posts
            .get_unique_post(&self.post_id)
            .await
            .to_graphql_result()
    }

    async fn likes(&self, ctx: &Context<'_>) -> Result<u64> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .comments
            .count_comment_likes(&self.id)
            .await
            .to_graphql_result()
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewPost {
    pub user_id: ID,
    pub content: String,
    pub image_url: Option<String>,
}

#[derive(InputObject, Clone, Debug)]
pub struct NewComment {
    pub user_id: ID,
    pub post_id: ID,
    pub content: String,
}

#[derive(InputObject, Clone, Debug)]
pub struct PostLikeInput {
    pub post_id: ID,
    pub user_id: ID,
}

#[derive(InputObject, Clone, Debug)]
pub struct CommentLikeInput {
    pub comment_id: ID,
    pub user_id: ID,
}
