use async_graphql::Enum;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Enum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Role {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "FACILITATOR")]
    Facilitator,
    #[sea_orm(string_value = "USER")]
    User,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Enum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Enum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PastoralStatus {
    #[sea_orm(string_value = "NEWCOMER")]
    Newcomer,
    #[sea_orm(string_value = "MEMBER")]
    Member,
    #[sea_orm(string_value = "LEADER")]
    Leader,
    #[sea_orm(string_value = "PASTOR")]
    Pastor,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Enum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Satellite {
    #[sea_orm(string_value = "CENTRAL")]
    Central,
    #[sea_orm(string_value = "NORTH")]
    North,
    #[sea_orm(string_value = "SOUTH")]
    South,
    #[sea_orm(string_value = "EAST")]
    East,
    #[sea_orm(string_value = "WEST")]
    West,
}

/// Battleground powercard effects. A team holds at most one of these as its
/// powercard and plays it against a defending team.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Enum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum BattlegroundEffect {
    #[sea_orm(string_value = "ADD_20_PERCENT")]
    #[graphql(name = "ADD_20_PERCENT")]
    Add20Percent,
    #[sea_orm(string_value = "ADD_30_PERCENT")]
    #[graphql(name = "ADD_30_PERCENT")]
    Add30Percent,
    #[sea_orm(string_value = "ADD_50_PERCENT")]
    #[graphql(name = "ADD_50_PERCENT")]
    Add50Percent,
    #[sea_orm(string_value = "ADD_90_PERCENT")]
    #[graphql(name = "ADD_90_PERCENT")]
    Add90Percent,
    #[sea_orm(string_value = "ADD_100_PERCENT")]
    #[graphql(name = "ADD_100_PERCENT")]
    Add100Percent,
    #[sea_orm(string_value = "SUBTRACT_20_PERCENT")]
    #[graphql(name = "SUBTRACT_20_PERCENT")]
    Subtract20Percent,
    #[sea_orm(string_value = "SUBTRACT_30_PERCENT")]
    #[graphql(name = "SUBTRACT_30_PERCENT")]
    Subtract30Percent,
    #[sea_orm(string_value = "SUBTRACT_50_PERCENT")]
    #[graphql(name = "SUBTRACT_50_PERCENT")]
    Subtract50Percent,
    #[sea_orm(string_value = "GIVE_80")]
    #[graphql(name = "GIVE_80")]
    Give80,
    #[sea_orm(string_value = "GIVE_100")]
    #[graphql(name = "GIVE_100")]
    Give100,
    #[sea_orm(string_value = "GIVE_150")]
    #[graphql(name = "GIVE_150")]
    Give150,
    #[sea_orm(string_value = "GIVE_200")]
    #[graphql(name = "GIVE_200")]
    Give200,
    #[sea_orm(string_value = "STEAL_80")]
    #[graphql(name = "STEAL_80")]
    Steal80,
    #[sea_orm(string_value = "STEAL_100")]
    #[graphql(name = "STEAL_100")]
    Steal100,
    #[sea_orm(string_value = "STEAL_150")]
    #[graphql(name = "STEAL_150")]
    Steal150,
    #[sea_orm(string_value = "STEAL_200")]
    #[graphql(name = "STEAL_200")]
    Steal200,
}

impl BattlegroundEffect {
    /// Apply the effect to an attacker/defender points pair and return the
    /// resulting `(attacker, defender)` points.
    ///
    /// Percentage effects only touch the attacker. Give/steal effects move a
    /// fixed amount between the two teams.
    pub fn apply(self, attacker: f64, defender: f64) -> (f64, f64) {
        use BattlegroundEffect::*;

        match self {
            Add20Percent => (attacker * 1.2, defender),
            Add30Percent => (attacker * 1.3, defender),
            Add50Percent => (attacker * 1.5, defender),
            Add90Percent => (attacker * 1.9, defender),
            Add100Percent => (attacker * 2.0, defender),
            Subtract20Percent => (attacker * 0.8, defender),
            Subtract30Percent => (attacker * 0.7, defender),
            Subtract50Percent => (attacker * 0.5, defender),
            Give80 | Give100 | Give150 | Give200 => {
                let amount = self.transfer_amount();
                (attacker - amount, defender + amount)
            }
            Steal80 | Steal100 | Steal150 | Steal200 => {
                let amount = self.transfer_amount();
                (attacker + amount, defender - amount)
            }
        }
    }

    fn transfer_amount(self) -> f64 {
        use BattlegroundEffect::*;

        match self {
            Give80 | Steal80 => 80.0,
            Give100 | Steal100 => 100.0,
            Give150 | Steal150 => 150.0,
            Give200 | Steal200 => 200.0,
            _ => 0.0,
        }
    }
}
