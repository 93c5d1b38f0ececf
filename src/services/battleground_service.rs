use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;

use crate::database::entities::{battleground_rooms, teams};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{
    BattlegroundRoom, BattlegroundRound, NewBattlegroundRoom, PlayPowercardInput, PowercardPlay,
    Team, UpdateBattlegroundRoomInput,
};
use crate::services::patch::patch;
use crate::services::row_lock::claim_row;
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct BattlegroundService {
    db: DatabaseConnection,
}

impl BattlegroundService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_room(&self, code: &str) -> ApiResult<BattlegroundRoom> {
        battleground_rooms::Entity::find()
            .filter(battleground_rooms::Column::Code.eq(code))
            .one(&self.db)
            .await?
            .map(BattlegroundRoom::from)
            .ok_or_else(|| ApiError::not_found("BattlegroundRoom", code))
    }

    pub async fn get_many_room(&self, page: Pagination) -> ApiResult<Vec<BattlegroundRoom>> {
        let rooms = QuerySpec::<battleground_rooms::Entity>::new()
            .chronological(battleground_rooms::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(rooms.into_iter().map(BattlegroundRoom::from).collect())
    }

    /// Rooms open at round zero and not yet started.
    pub async fn create_room(&self, param: NewBattlegroundRoom) -> ApiResult<BattlegroundRoom> {
        let now = Utc::now();
        let room = battleground_rooms::ActiveModel {
            id: Set(new_id()),
            code: Set(param.code),
            round: Set(0),
            started: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!("Opened battleground room {}", room.code);
        Ok(BattlegroundRoom::from(room))
    }

    pub async fn update_room(
        &self,
        code: &str,
        param: UpdateBattlegroundRoomInput,
    ) -> ApiResult<BattlegroundRoom> {
        let room = battleground_rooms::Entity::find()
            .filter(battleground_rooms::Column::Code.eq(code))
            .one(&self.db)
            .await?
            .ok_or_else(|| ApiError::not_found("BattlegroundRoom", code))?;

        let mut active: battleground_rooms::ActiveModel = room.into();
        patch(&mut active.round, param.round);
        patch(&mut active.started, param.started);
        active.updated_at = Set(Utc::now());

        Ok(BattlegroundRoom::from(active.update(&self.db).await?))
    }

    /// Play the attacker's powercard against the defender. Both teams' points
    /// change together and the card is spent.
    pub async fn play_powercard(&self, param: PlayPowercardInput) -> ApiResult<PowercardPlay> {
        let attacker_id = param.attacker_id.to_string();
        let defender_id = param.defender_id.to_string();
        if attacker_id == defender_id {
            return Err(ApiError::precondition("a team cannot play a powercard on itself"));
        }

        let txn = self.db.begin().await?;

        // Claimed in id order so two plays between the same teams cannot deadlock.
        let mut ids = [attacker_id.as_str(), defender_id.as_str()];
        ids.sort_unstable();
        for id in ids {
            if !claim_row::<teams::Entity, _>(&txn, teams::Column::Id, teams::Column::UpdatedAt, id)
                .await?
            {
                return Err(ApiError::not_found("Team", id));
            }
        }

        let attacker = teams::Entity::find_by_id(attacker_id.clone())
            .one(&txn)
            .await?
            .ok_or_else(|| ApiError::not_found("Team", &attacker_id))?;
        let defender = teams::Entity::find_by_id(defender_id.clone())
            .one(&txn)
            .await?
            .ok_or_else(|| ApiError::not_found("Team", &defender_id))?;

        let effect = attacker
            .powercard
            .ok_or_else(|| ApiError::precondition("attacking team holds no powercard"))?;
        let (attacker_points, defender_points) = effect.apply(attacker.points, defender.points);

        let now = Utc::now();
        let mut attacker: teams::ActiveModel = attacker.into();
        attacker.points = Set(attacker_points);
        attacker.powercard = Set(None);
        attacker.updated_at = Set(now);
        let attacker = attacker.update(&txn).await?;

        let mut defender: teams::ActiveModel = defender.into();
        defender.points = Set(defender_points);
        defender.updated_at = Set(now);
        let defender = defender.update(&txn).await?;

        txn.commit().await?;

        info!(
            "Team {} played {:?} on team {}",
            attacker.id, effect, defender.id
        );
        Ok(PowercardPlay {
            effect,
            attacker: Team::from(attacker),
            defender: Team::from(defender),
        })
    }

    // TODO: rounds need a table of played powercards before they can be served.
    pub async fn get_round(&self, _code: &str, _round: i32) -> ApiResult<BattlegroundRound> {
        Err(ApiError::NotImplemented("battlegroundRound"))
    }
}
