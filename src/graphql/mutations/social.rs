use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Comment, CommentLikeInput, NewComment, NewPost, Post, PostLikeInput};

#[derive(Default)]
pub struct SocialMutation;

#[Object]
impl SocialMutation {
    async fn create_post(&self, ctx: &Context<'_>, param: NewPost) -> Result<Post> {
        let context = ctx.data::<GraphQLContext>()?;
        context.posts.create_post(param).await.to_graphql_result()
    }

    async fn create_comment(&self, ctx: &Context<'_>, param: NewComment) -> Result<Comment> {
        let context = ctx.data::<GraphQLContext>()?;
        context.comments.create_comment(param).await.to_graphql_result()
    }

    async fn like_post(&self, ctx: &Context<'_>, param: PostLikeInput) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.posts.like_post(param).await.to_graphql_result()
    }

    async fn unlike_post(&self, ctx: &Context<'_>, param: PostLikeInput) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.posts.unlike_post(param).await.to_graphql_result()
    }

    async fn like_comment(&self, ctx: &Context<'_>, param: CommentLikeInput) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.comments.like_comment(param).await.to_graphql_result()
    }

    async fn unlike_comment(&self, ctx: &Context<'_>, param: CommentLikeInput) -> Result<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.comments.unlike_comment(param).await.to_graphql_result()
    }
}
