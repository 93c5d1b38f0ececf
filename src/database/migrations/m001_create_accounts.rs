use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clusters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clusters::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Clusters::Name).string().not_null())
                    .col(&mut timestamp(Clusters::CreatedAt))
                    .col(&mut timestamp(Clusters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teams::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::AvatarUrl).string())
                    .col(ColumnDef::new(Teams::Points).double().not_null().default(0.0))
                    .col(ColumnDef::new(Teams::Powercard).string())
                    .col(ColumnDef::new(Teams::ClusterId).string())
                    .col(&mut timestamp(Teams::CreatedAt))
                    .col(&mut timestamp(Teams::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_cluster_id")
                            .from(Teams::Table, Teams::ClusterId)
                            .to(Clusters::Table, Clusters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Addresses::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Addresses::Line1).string().not_null())
                    .col(ColumnDef::new(Addresses::Line2).string())
                    .col(ColumnDef::new(Addresses::City).string().not_null())
                    .col(ColumnDef::new(Addresses::State).string().not_null())
                    .col(ColumnDef::new(Addresses::Country).string().not_null())
                    .col(ColumnDef::new(Addresses::PostalCode).string().not_null())
                    .col(&mut timestamp(Addresses::CreatedAt))
                    .col(&mut timestamp(Addresses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Profiles::Status).string())
                    .col(ColumnDef::new(Profiles::Gender).string().not_null())
                    .col(ColumnDef::new(Profiles::Satellite).string())
                    .col(ColumnDef::new(Profiles::NameEng).string().not_null())
                    .col(ColumnDef::new(Profiles::NameChi).string())
                    .col(ColumnDef::new(Profiles::Contact).string().not_null())
                    .col(ColumnDef::new(Profiles::Dob).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::TngReceiptUrl).string())
                    .col(ColumnDef::new(Profiles::AvatarUrl).string())
                    .col(ColumnDef::new(Profiles::InvitedBy).string())
                    .col(ColumnDef::new(Profiles::AddressId).string())
                    .col(&mut timestamp(Profiles::CreatedAt))
                    .col(&mut timestamp(Profiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_address_id")
                            .from(Profiles::Table, Profiles::AddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::ProfileId).string().not_null())
                    .col(ColumnDef::new(Users::TeamId).string())
                    .col(&mut timestamp(Users::CreatedAt))
                    .col(&mut timestamp(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_profile_id")
                            .from(Users::Table, Users::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_team_id")
                            .from(Users::Table, Users::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserRoles::UserId).string().not_null())
                    .col(ColumnDef::new(UserRoles::Role).string().not_null())
                    .col(&mut timestamp(UserRoles::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserRoles::UserId)
                            .col(UserRoles::Role),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_user_id")
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Invitations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Invitations::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Invitations::TeamId).string().not_null())
                    .col(ColumnDef::new(Invitations::UserId).string().not_null())
                    .col(ColumnDef::new(Invitations::FromId).string())
                    .col(&mut timestamp(Invitations::CreatedAt))
                    .col(&mut timestamp(Invitations::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitations_team_id")
                            .from(Invitations::Table, Invitations::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitations_user_id")
                            .from(Invitations::Table, Invitations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitations_from_id")
                            .from(Invitations::Table, Invitations::FromId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invitations_user_id")
                    .table(Invitations::Table)
                    .col(Invitations::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invitations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clusters::Table).to_owned())
            .await?;

        Ok(())
    }
}

pub(super) fn timestamp<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[derive(Iden)]
pub(super) enum Clusters {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(super) enum Teams {
    Table,
    Id,
    Name,
    AvatarUrl,
    Points,
    Powercard,
    ClusterId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    Line1,
    Line2,
    City,
    State,
    Country,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
    Status,
    Gender,
    Satellite,
    NameEng,
    NameChi,
    Contact,
    Dob,
    Bio,
    TngReceiptUrl,
    AvatarUrl,
    InvitedBy,
    AddressId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(super) enum Users {
    Table,
    Id,
    Username,
    Email,
    ProfileId,
    TeamId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum UserRoles {
    Table,
    UserId,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Invitations {
    Table,
    Id,
    TeamId,
    UserId,
    FromId,
    CreatedAt,
    UpdatedAt,
}
