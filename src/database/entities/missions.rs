use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub points: f64,
    pub start_at: ChronoDateTimeUtc,
    pub end_at: ChronoDateTimeUtc,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_missions::Entity")]
    TeamMissions,
}

impl Related<super::team_missions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMissions.def()
    }
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_missions::Relation::Teams.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_missions::Relation::Missions.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
