use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::{battleground_rooms, BattlegroundEffect};
use crate::graphql::types::Team;

#[derive(SimpleObject, Clone, Debug)]
pub struct BattlegroundRoom {
    pub id: ID,
    pub code: String,
    pub round: i32,
    pub started: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<battleground_rooms::Model> for BattlegroundRoom {
    fn from(model: battleground_rooms::Model) -> Self {
        Self {
            id: ID::from(model.id),
            code: model.code,
            round: model.round,
            started: model.started,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Powercards played during one round of a room
#[derive(SimpleObject, Clone, Debug)]
pub struct BattlegroundRound {
    pub room_code: String,
    pub round: i32,
    pub effects: Vec<BattlegroundEffect>,
}

#[derive(InputObject, Clone, Debug)]
pub struct NewBattlegroundRoom {
    pub code: String,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UpdateBattlegroundRoomInput {
    pub round: Option<i32>,
    pub started: Option<bool>,
}

#[derive(InputObject, Clone, Debug)]
pub struct PlayPowercardInput {
    pub attacker_id: ID,
    pub defender_id: ID,
}

/// Both teams as they stand after a powercard was played
#[derive(SimpleObject, Clone, Debug)]
pub struct PowercardPlay {
    pub effect: BattlegroundEffect,
    pub attacker: Team,
    pub defender: Team,
}
