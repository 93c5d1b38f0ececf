use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::BattlegroundEffect;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub points: f64,
    pub powercard: Option<BattlegroundEffect>,
    pub cluster_id: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clusters::Entity",
        from = "Column::ClusterId",
        to = "super::clusters::Column::Id"
    )]
    Clusters,
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::team_missions::Entity")]
    TeamMissions,
    #[sea_orm(has_many = "super::invitations::Entity")]
    Invitations,
}

impl Related<super::clusters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clusters.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::team_missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMissions.def()
    }
}

impl Related<super::invitations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invitations.def()
    }
}

impl Related<super::missions::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_missions::Relation::Missions.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_missions::Relation::Teams.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
