use sea_orm_migration::prelude::*;

use super::m001_create_accounts::{timestamp, Teams};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Missions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Missions::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Missions::Title).string().not_null())
                    .col(ColumnDef::new(Missions::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Missions::Description).text())
                    .col(ColumnDef::new(Missions::Points).double().not_null().default(0.0))
                    .col(&mut timestamp(Missions::StartAt))
                    .col(&mut timestamp(Missions::EndAt))
                    .col(&mut timestamp(Missions::CreatedAt))
                    .col(&mut timestamp(Missions::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamMissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeamMissions::TeamId).string().not_null())
                    .col(ColumnDef::new(TeamMissions::MissionId).string().not_null())
                    .col(&mut timestamp(TeamMissions::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(TeamMissions::TeamId)
                            .col(TeamMissions::MissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_missions_team_id")
                            .from(TeamMissions::Table, TeamMissions::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_missions_mission_id")
                            .from(TeamMissions::Table, TeamMissions::MissionId)
                            .to(Missions::Table, Missions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Escapes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Escapes::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Escapes::TeamId).string().not_null().unique_key())
                    .col(ColumnDef::new(Escapes::MissionOne).boolean().not_null().default(false))
                    .col(ColumnDef::new(Escapes::MissionTwo).boolean().not_null().default(false))
                    .col(ColumnDef::new(Escapes::MissionThree).integer().not_null().default(0))
                    .col(&mut timestamp(Escapes::CreatedAt))
                    .col(&mut timestamp(Escapes::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_escapes_team_id")
                            .from(Escapes::Table, Escapes::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Speeds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Speeds::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Speeds::TeamId).string().not_null().unique_key())
                    .col(ColumnDef::new(Speeds::MissionId).string().not_null())
                    .col(ColumnDef::new(Speeds::Answer).text())
                    .col(ColumnDef::new(Speeds::Points).double().not_null().default(0.0))
                    .col(ColumnDef::new(Speeds::CompletedAt).timestamp_with_time_zone())
                    .col(&mut timestamp(Speeds::CreatedAt))
                    .col(&mut timestamp(Speeds::UpdatedAt))
                    .foreign_key(&mut score_team_fk(
                        "fk_speeds_team_id",
                        Speeds::Table,
                        Speeds::TeamId,
                    ))
                    .foreign_key(&mut score_mission_fk(
                        "fk_speeds_mission_id",
                        Speeds::Table,
                        Speeds::MissionId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Humanities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Humanities::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Humanities::TeamId).string().not_null().unique_key())
                    .col(ColumnDef::new(Humanities::MissionId).string().not_null())
                    .col(ColumnDef::new(Humanities::SubmissionUrl).string())
                    .col(ColumnDef::new(Humanities::Points).double().not_null().default(0.0))
                    .col(&mut timestamp(Humanities::CreatedAt))
                    .col(&mut timestamp(Humanities::UpdatedAt))
                    .foreign_key(&mut score_team_fk(
                        "fk_humanities_team_id",
                        Humanities::Table,
                        Humanities::TeamId,
                    ))
                    .foreign_key(&mut score_mission_fk(
                        "fk_humanities_mission_id",
                        Humanities::Table,
                        Humanities::MissionId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Discoveries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Discoveries::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Discoveries::TeamId).string().not_null().unique_key())
                    .col(ColumnDef::new(Discoveries::MissionId).string().not_null())
                    .col(ColumnDef::new(Discoveries::Found).integer().not_null().default(0))
                    .col(ColumnDef::new(Discoveries::Points).double().not_null().default(0.0))
                    .col(&mut timestamp(Discoveries::CreatedAt))
                    .col(&mut timestamp(Discoveries::UpdatedAt))
                    .foreign_key(&mut score_team_fk(
                        "fk_discoveries_team_id",
                        Discoveries::Table,
                        Discoveries::TeamId,
                    ))
                    .foreign_key(&mut score_mission_fk(
                        "fk_discoveries_mission_id",
                        Discoveries::Table,
                        Discoveries::MissionId,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discoveries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Humanities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Speeds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Escapes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamMissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Missions::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn score_team_fk<T, C>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Teams::Table, Teams::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

fn score_mission_fk<T, C>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Missions::Table, Missions::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(Iden)]
enum Missions {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Points,
    StartAt,
    EndAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeamMissions {
    Table,
    TeamId,
    MissionId,
    CreatedAt,
}

#[derive(Iden)]
enum Escapes {
    Table,
    Id,
    TeamId,
    MissionOne,
    MissionTwo,
    MissionThree,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Speeds {
    Table,
    Id,
    TeamId,
    MissionId,
    Answer,
    Points,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Humanities {
    Table,
    Id,
    TeamId,
    MissionId,
    SubmissionUrl,
    Points,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Discoveries {
    Table,
    Id,
    TeamId,
    MissionId,
    Found,
    Points,
    CreatedAt,
    UpdatedAt,
}
