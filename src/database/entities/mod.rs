pub mod enums;

// Accounts
pub mod addresses;
pub mod clusters;
pub mod invitations;
pub mod profiles;
pub mod teams;
pub mod user_roles;
pub mod users;

// Missions and scoring
pub mod discoveries;
pub mod escapes;
pub mod humanities;
pub mod missions;
pub mod speeds;
pub mod team_missions;

// Social
pub mod comment_likes;
pub mod comments;
pub mod post_likes;
pub mod posts;

pub mod battleground_rooms;

pub use enums::{BattlegroundEffect, Gender, PastoralStatus, Role, Satellite};
