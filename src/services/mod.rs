pub mod battleground_service;
pub mod cluster_service;
pub mod comment_service;
pub mod invitation_service;
pub mod mission_service;
pub mod patch;
pub mod post_service;
pub mod query_spec;
pub mod row_lock;
pub mod score_service;
pub mod team_service;
pub mod user_service;

pub use battleground_service::BattlegroundService;
pub use cluster_service::ClusterService;
pub use comment_service::CommentService;
pub use invitation_service::InvitationService;
pub use mission_service::MissionService;
pub use post_service::PostService;
pub use query_spec::{PagePolicy, Pagination, QuerySpec};
pub use score_service::ScoreService;
pub use team_service::TeamService;
pub use user_service::UserService;

/// Fresh identifier for a new record.
///
/// UUIDv7: ids generated by this process sort in creation order, which keeps
/// listings stable when two rows share a `created_at`.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
