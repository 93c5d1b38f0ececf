//! Posts, comments and likes

mod common;

use anyhow::Result;
use async_graphql::ID;
use common::*;
use thebox::graphql::types::{CommentLikeInput, NewComment, NewPost, PostLikeInput};
use thebox::services::{CommentService, Pagination, PostService};

#[tokio::test]
async fn test_create_post_and_comments() -> Result<()> {
    let db = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let comments = CommentService::new(db.clone());
    let author = create_user(&db, "author").await?;
    let reader = create_user(&db, "reader").await?;

    let post = posts
        .create_post(NewPost {
            user_id: author.id.clone(),
            content: "Escape room cleared in 14 minutes".to_string(),
            image_url: None,
        })
        .await?;
    assert_eq!(post.user_id, author.id.as_str());

    for content in ["Nice!", "Teach us your ways"] {
        comments
            .create_comment(NewComment {
                user_id: reader.id.clone(),
                post_id: post.id.clone(),
                content: content.to_string(),
            })
            .await?;
    }

    let thread = comments
        .get_many_post_comments(Pagination::first(10), &post.id)
        .await?;
    let contents: Vec<_> = thread.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["Nice!", "Teach us your ways"]);

    let fetched = posts.get_unique_post(&post.id).await?;
    assert_eq!(fetched.content, post.content);
    assert_eq!(posts.get_many_post(Pagination::first(10)).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_comment_on_missing_post_fails() -> Result<()> {
    let db = setup_test_db().await?;
    let comments = CommentService::new(db.clone());
    let reader = create_user(&db, "reader").await?;

    let err = comments
        .create_comment(NewComment {
            user_id: reader.id.clone(),
            post_id: ID::from("no-such-post"),
            content: "Hello?".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_REFERENCE");

    Ok(())
}

#[tokio::test]
async fn test_post_likes() -> Result<()> {
    let db = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let author = create_user(&db, "author").await?;
    let fan = create_user(&db, "fan").await?;

    let post = posts
        .create_post(NewPost {
            user_id: author.id.clone(),
            content: "Team photo".to_string(),
            image_url: Some("https://cdn.thebox.test/photo.jpg".to_string()),
        })
        .await?;
    let like = PostLikeInput {
        post_id: post.id.clone(),
        user_id: fan.id.clone(),
    };

    assert_eq!(posts.count_post_likes(&post.id).await?, 0);
    assert!(!posts.is_post_liked(&post.id, &fan.id).await?);

    assert!(posts.like_post(like.clone()).await?);
    assert_eq!(posts.count_post_likes(&post.id).await?, 1);
    assert!(posts.is_post_liked(&post.id, &fan.id).await?);
    assert!(!posts.is_post_liked(&post.id, &author.id).await?);

    let err = posts.like_post(like.clone()).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(posts.count_post_likes(&post.id).await?, 1);

    assert!(posts.unlike_post(like.clone()).await?);
    assert!(!posts.unlike_post(like).await?);
    assert_eq!(posts.count_post_likes(&post.id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_comment_likes() -> Result<()> {
    let db = setup_test_db().await?;
    let posts = PostService::new(db.clone());
    let comments = CommentService::new(db.clone());
    let author = create_user(&db, "author").await?;
    let fan = create_user(&db, "fan").await?;

    let post = posts
        .create_post(NewPost {
            user_id: author.id.clone(),
            content: "Who found the last clue?".to_string(),
            image_url: None,
        })
        .await?;
    let comment = comments
        .create_comment(NewComment {
            user_id: author.id.clone(),
            post_id: post.id.clone(),
            content: "It was under the table".to_string(),
        })
        .await?;
    let like = CommentLikeInput {
        comment_id: comment.id.clone(),
        user_id: fan.id.clone(),
    };

    assert!(comments.like_comment(like.clone()).await?);
    assert_eq!(comments.count_comment_likes(&comment.id).await?, 1);
    assert!(comments.unlike_comment(like).await?);
    assert_eq!(comments.count_comment_likes(&comment.id).await?, 0);

    let fetched = comments.get_unique_comment(&comment.id).await?;
    assert_eq!(fetched.post_id, post.id.as_str());

    Ok(())
}
