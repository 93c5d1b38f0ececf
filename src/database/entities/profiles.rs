use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{Gender, PastoralStatus, Satellite};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub status: Option<PastoralStatus>,
    pub gender: Gender,
    pub satellite: Option<Satellite>,
    pub name_eng: String,
    pub name_chi: Option<String>,
    pub contact: String,
    pub dob: ChronoDateTimeUtc,
    pub bio: Option<String>,
    pub tng_receipt_url: Option<String>,
    pub avatar_url: Option<String>,
    pub address_id: Option<String>,
    pub invited_by: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::Id"
    )]
    Addresses,
    #[sea_orm(has_one = "super::users::Entity")]
    Users,
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
