use sea_orm::{DatabaseConnection, EntityTrait};

use crate::database::entities::clusters;
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::Cluster;

#[derive(Clone)]
pub struct ClusterService {
    db: DatabaseConnection,
}

impl ClusterService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_cluster(&self, cluster_id: &str) -> ApiResult<Cluster> {
        clusters::Entity::find_by_id(cluster_id)
            .one(&self.db)
            .await?
            .map(Cluster::from)
            .ok_or_else(|| ApiError::not_found("Cluster", cluster_id))
    }
}
