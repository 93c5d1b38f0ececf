use sea_orm_migration::prelude::*;

use super::m001_create_accounts::timestamp;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattlegroundRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BattlegroundRooms::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BattlegroundRooms::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(BattlegroundRooms::Round)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(BattlegroundRooms::Started)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut timestamp(BattlegroundRooms::CreatedAt))
                    .col(&mut timestamp(BattlegroundRooms::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BattlegroundRooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BattlegroundRooms {
    Table,
    Id,
    Code,
    Round,
    Started,
    CreatedAt,
    UpdatedAt,
}
