use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::database::entities::{comment_likes, comments};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{Comment, CommentLikeInput, NewComment};
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct CommentService {
    db: DatabaseConnection,
}

impl CommentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_comment(&self, comment_id: &str) -> ApiResult<Comment> {
        comments::Entity::find_by_id(comment_id)
            .one(&self.db)
            .await?
            .map(Comment::from)
            .ok_or_else(|| ApiError::not_found("Comment", comment_id))
    }

    pub async fn get_many_post_comments(
        &self,
        page: Pagination,
        post_id: &str,
    ) -> ApiResult<Vec<Comment>> {
        let comments = QuerySpec::<comments::Entity>::new()
            .filter(comments::Column::PostId.eq(post_id))
            .chronological(comments::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from).collect())
    }

    pub async fn create_comment(&self, param: NewComment) -> ApiResult<Comment> {
        let now = Utc::now();
        let comment = comments::ActiveModel {
            id: Set(new_id()),
            user_id: Set(param.user_id.into()),
            post_id: Set(param.post_id.into()),
            content: Set(param.content),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        debug!("User {} commented on post {}", comment.user_id, comment.post_id);
        Ok(Comment::from(comment))
    }

    pub async fn count_comment_likes(&self, comment_id: &str) -> ApiResult<u64> {
        Ok(QuerySpec::<comment_likes::Entity>::new()
            .filter(comment_likes::Column::CommentId.eq(comment_id))
            .count(&self.db)
            .await?)
    }

    pub async fn like_comment(&self, param: CommentLikeInput) -> ApiResult<bool> {
        let like = comment_likes::ActiveModel {
            comment_id: Set(param.comment_id.into()),
            user_id: Set(param.user_id.into()),
            created_at: Set(Utc::now()),
        };
        comment_likes::Entity::insert(like)
            .exec_without_returning(&self.db)
            .await?;

        Ok(true)
    }

    pub async fn unlike_comment(&self, param: CommentLikeInput) -> ApiResult<bool> {
        let result = comment_likes::Entity::delete_many()
            .filter(comment_likes::Column::CommentId.eq(param.comment_id.as_str()))
            .filter(comment_likes::Column::UserId.eq(param.user_id.as_str()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
