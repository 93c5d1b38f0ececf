use async_graphql::*;

use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{
    BattlegroundRoom, NewBattlegroundRoom, PlayPowercardInput, PowercardPlay,
    UpdateBattlegroundRoomInput,
};

#[derive(Default)]
pub struct BattlegroundMutation;

#[Object]
impl BattlegroundMutation {
    async fn create_battleground_room(
        &self,
        ctx: &Context<'_>,
        param: NewBattlegroundRoom,
    ) -> Result<BattlegroundRoom> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .create_room(param)
            .await
            .to_graphql_result()
    }

    async fn update_battleground_room(
        &self,
        ctx: &Context<'_>,
        code: String,
        param: UpdateBattlegroundRoomInput,
    ) -> Result<BattlegroundRoom> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .update_room(&code, param)
            .await
            .to_graphql_result()
    }

    async fn play_powercard(
        &self,
        ctx: &Context<'_>,
        param: PlayPowercardInput,
    ) -> Result<PowercardPlay> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .battleground
            .play_powercard(param)
            .await
            .to_graphql_result()
    }
}
