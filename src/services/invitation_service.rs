use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set,
    TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::database::entities::{invitations, users};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{Invitation, NewInvitation};
use crate::services::row_lock::claim_row;
use crate::services::{new_id, Pagination, QuerySpec};

#[derive(Clone)]
pub struct InvitationService {
    db: DatabaseConnection,
}

impl InvitationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_invitation(&self, invitation_id: &str) -> ApiResult<Invitation> {
        invitations::Entity::find_by_id(invitation_id)
            .one(&self.db)
            .await?
            .map(Invitation::from)
            .ok_or_else(|| ApiError::not_found("Invitation", invitation_id))
    }

    /// Invitations addressed to the user
    pub async fn get_many_user_invitations(
        &self,
        page: Pagination,
        user_id: &str,
    ) -> ApiResult<Vec<Invitation>> {
        let invitations = QuerySpec::<invitations::Entity>::new()
            .filter(invitations::Column::UserId.eq(user_id))
            .chronological(invitations::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(invitations.into_iter().map(Invitation::from).collect())
    }

    pub async fn create_invitation(&self, param: NewInvitation) -> ApiResult<Invitation> {
        let now = Utc::now();
        let invitation = invitations::ActiveModel {
            id: Set(new_id()),
            team_id: Set(param.team_id.into()),
            user_id: Set(param.to.into()),
            from_id: Set(param.from.map(String::from)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "Invited user {} to team {}",
            invitation.user_id, invitation.team_id
        );
        Ok(Invitation::from(invitation))
    }

    /// Consume the invitation and move the invited user into its team.
    ///
    /// Both writes happen in one transaction: if the user cannot be moved the
    /// invitation is left untouched. Returns whether the user ended up with a
    /// team.
    pub async fn accept_invitation(&self, invitation_id: &str) -> ApiResult<bool> {
        let txn = self.db.begin().await?;

        match accept(&txn, invitation_id).await {
            Ok(user) => {
                txn.commit().await?;
                info!(
                    "User {} accepted invitation {} into team {:?}",
                    user.id, invitation_id, user.team_id
                );
                Ok(user.team_id.is_some())
            }
            Err(err) => {
                warn!("Rolling back acceptance of invitation {}: {}", invitation_id, err);
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    /// Delete the invitation. Fails with not-found when there was nothing to
    /// delete.
    pub async fn reject_invitation(&self, invitation_id: &str) -> ApiResult<bool> {
        let result = invitations::Entity::delete_by_id(invitation_id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ApiError::not_found("Invitation", invitation_id));
        }

        debug!("Rejected invitation {}", invitation_id);
        Ok(true)
    }
}

async fn accept(txn: &DatabaseTransaction, invitation_id: &str) -> ApiResult<users::Model> {
    // Claimed first so two accepts of one invitation cannot both proceed.
    if !claim_row::<invitations::Entity, _>(
        txn,
        invitations::Column::Id,
        invitations::Column::UpdatedAt,
        invitation_id,
    )
    .await?
    {
        return Err(ApiError::not_found("Invitation", invitation_id));
    }

    let invitation = invitations::Entity::find_by_id(invitation_id)
        .one(txn)
        .await?
        .ok_or_else(|| ApiError::not_found("Invitation", invitation_id))?;

    invitations::Entity::delete_by_id(invitation.id.as_str())
        .exec(txn)
        .await?;

    let user = users::Entity::find_by_id(invitation.user_id.as_str())
        .one(txn)
        .await?
        .ok_or_else(|| ApiError::not_found("User", invitation.user_id.as_str()))?;

    let mut active: users::ActiveModel = user.into();
    active.team_id = Set(Some(invitation.team_id));
    active.updated_at = Set(Utc::now());

    Ok(active.update(txn).await?)
}
