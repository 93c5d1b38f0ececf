use sea_orm_migration::prelude::*;

use super::m001_create_accounts::{timestamp, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Posts::UserId).string().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(ColumnDef::new(Posts::ImageUrl).string())
                    .col(&mut timestamp(Posts::CreatedAt))
                    .col(&mut timestamp(Posts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_user_id")
                            .from(Posts::Table, Posts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comments::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Comments::UserId).string().not_null())
                    .col(ColumnDef::new(Comments::PostId).string().not_null())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(&mut timestamp(Comments::CreatedAt))
                    .col(&mut timestamp(Comments::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user_id")
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post_id")
                            .from(Comments::Table, Comments::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_post_id")
                    .table(Comments::Table)
                    .col(Comments::PostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostLikes::PostId).string().not_null())
                    .col(ColumnDef::new(PostLikes::UserId).string().not_null())
                    .col(&mut timestamp(PostLikes::CreatedAt))
                    .primary_key(Index::create().col(PostLikes::PostId).col(PostLikes::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_post_id")
                            .from(PostLikes::Table, PostLikes::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_user_id")
                            .from(PostLikes::Table, PostLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CommentLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CommentLikes::CommentId).string().not_null())
                    .col(ColumnDef::new(CommentLikes::UserId).string().not_null())
                    .col(&mut timestamp(CommentLikes::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(CommentLikes::CommentId)
                            .col(CommentLikes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_likes_comment_id")
                            .from(CommentLikes::Table, CommentLikes::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_likes_user_id")
                            .from(CommentLikes::Table, CommentLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostLikes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    UserId,
    Content,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    UserId,
    PostId,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum PostLikes {
    Table,
    PostId,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum CommentLikes {
    Table,
    CommentId,
    UserId,
    CreatedAt,
}
