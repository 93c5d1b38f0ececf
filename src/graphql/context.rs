use sea_orm::DatabaseConnection;

use crate::graphql::types::PaginationInput;
use crate::services::{
    BattlegroundService, ClusterService, CommentService, InvitationService, MissionService,
    PagePolicy, Pagination, PostService, ScoreService, TeamService, UserService,
};

#[derive(Clone)]
pub struct GraphQLContext {
    pub users: UserService,
    pub teams: TeamService,
    pub clusters: ClusterService,
    pub missions: MissionService,
    pub invitations: InvitationService,
    pub posts: PostService,
    pub comments: CommentService,
    pub scores: ScoreService,
    pub battleground: BattlegroundService,
    pub page_policy: PagePolicy,
}

impl GraphQLContext {
    pub fn new(db: DatabaseConnection, page_policy: PagePolicy) -> Self {
        Self {
            users: UserService::new(db.clone()),
            teams: TeamService::new(db.clone()),
            clusters: ClusterService::new(db.clone()),
            missions: MissionService::new(db.clone()),
            invitations: InvitationService::new(db.clone()),
            posts: PostService::new(db.clone()),
            comments: CommentService::new(db.clone()),
            scores: ScoreService::new(db.clone()),
            battleground: BattlegroundService::new(db),
            page_policy,
        }
    }

    /// Client pagination bounded by the server's page policy
    pub fn page(&self, input: PaginationInput) -> Pagination {
        self.page_policy.page(input.limit, input.offset)
    }
}
