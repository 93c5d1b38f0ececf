// Mutations grouped by functional area and merged into one root.

mod battleground;
mod invitation;
mod score;
mod social;
mod team;
mod user;

use async_graphql::*;

#[derive(Default, MergedObject)]
pub struct Mutation(
    pub user::UserMutation,
    pub team::TeamMutation,
    pub invitation::InvitationMutation,
    pub social::SocialMutation,
    pub score::ScoreMutation,
    pub battleground::BattlegroundMutation,
);
