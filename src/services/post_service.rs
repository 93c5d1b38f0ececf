use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::database::entities::{post_likes, posts};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{NewPost, Post, PostLikeInput};
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct PostService {
    db: DatabaseConnection,
}

impl PostService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_post(&self, post_id: &str) -> ApiResult<Post> {
        posts::Entity::find_by_id(post_id)
            .one(&self.db)
            .await?
            .map(Post::from)
            .ok_or_else(|| ApiError::not_found("Post", post_id))
    }

    pub async fn get_many_post(&self, page: Pagination) -> ApiResult<Vec<Post>> {
        let posts = QuerySpec::<posts::Entity>::new()
            .chronological(posts::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    pub async fn create_post(&self, param: NewPost) -> ApiResult<Post> {
        let now = Utc::now();
        let post = posts::ActiveModel {
            id: Set(new_id()),
            user_id: Set(param.user_id.into()),
            content: Set(param.content),
            image_url: Set(param.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        debug!("User {} created post {}", post.user_id, post.id);
        Ok(Post::from(post))
    }

    pub async fn count_post_likes(&self, post_id: &str) -> ApiResult<u64> {
        Ok(QuerySpec::<post_likes::Entity>::new()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(&self.db)
            .await?)
    }

    pub async fn is_post_liked(&self, post_id: &str, user_id: &str) -> ApiResult<bool> {
        let like = QuerySpec::<post_likes::Entity>::new()
            .filter(post_likes::Column::PostId.eq(post_id))
            .filter(post_likes::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(like.is_some())
    }

    /// Liking a post twice is a conflict.
    pub async fn like_post(&self, param: PostLikeInput) -> ApiResult<bool> {
        let like = post_likes::ActiveModel {
            post_id: Set(param.post_id.into()),
            user_id: Set(param.user_id.into()),
            created_at: Set(Utc::now()),
        };
        post_likes::Entity::insert(like)
            .exec_without_returning(&self.db)
            .await?;

        Ok(true)
    }

    /// Returns whether a like was removed.
    pub async fn unlike_post(&self, param: PostLikeInput) -> ApiResult<bool> {
        let result = post_likes::Entity::delete_many()
            .filter(post_likes::Column::PostId.eq(param.post_id.as_str()))
            .filter(post_likes::Column::UserId.eq(param.user_id.as_str()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
