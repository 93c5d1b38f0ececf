use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Set,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::database::entities::{addresses, profiles, user_roles, users, Role};
use crate::errors::{ApiError, ApiResult};
use crate::graphql::types::{
    Address, NewAddress, NewProfile, NewUser, Profile, UpdateProfileInput, UpdateUserInput, User,
};
use crate::services::patch::{patch, patch_nullable};
use crate::services::row_lock::claim_row;
use crate::services::{new_id, Pagination, QuerySpec};

/// Users together with their profile, address and roles
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_unique_user(&self, user_id: &str) -> ApiResult<User> {
        users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_else(|| ApiError::not_found("User", user_id))
    }

    pub async fn get_many_user(&self, page: Pagination) -> ApiResult<Vec<User>> {
        let users = QuerySpec::<users::Entity>::new()
            .chronological(users::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    pub async fn get_many_team_members(
        &self,
        page: Pagination,
        team_id: &str,
    ) -> ApiResult<Vec<User>> {
        let users = QuerySpec::<users::Entity>::new()
            .filter(users::Column::TeamId.eq(team_id))
            .chronological(users::Column::CreatedAt)
            .page(page)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    pub async fn count_users(&self) -> ApiResult<u64> {
        Ok(QuerySpec::<users::Entity>::new().count(&self.db).await?)
    }

    pub async fn get_many_roles(&self, user_id: &str) -> ApiResult<Vec<Role>> {
        let roles = QuerySpec::<user_roles::Entity>::new()
            .filter(user_roles::Column::UserId.eq(user_id))
            .chronological(user_roles::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(roles.into_iter().map(|row| row.role).collect())
    }

    pub async fn get_unique_profile(&self, profile_id: &str) -> ApiResult<Profile> {
        profiles::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await?
            .map(Profile::from)
            .ok_or_else(|| ApiError::not_found("Profile", profile_id))
    }

    pub async fn get_profile_address(&self, profile: &Profile) -> ApiResult<Address> {
        let Some(address_id) = profile.address_id.as_deref() else {
            return Err(ApiError::precondition(format!(
                "profile '{}' has no address",
                profile.id.as_str()
            )));
        };

        addresses::Entity::find_by_id(address_id)
            .one(&self.db)
            .await?
            .map(Address::from)
            .ok_or_else(|| ApiError::not_found("Address", address_id))
    }

    /// Create the user, its profile, its optional address and its roles as
    /// one unit.
    pub async fn create_user(&self, param: NewUser) -> ApiResult<User> {
        let txn = self.db.begin().await?;

        let profile = insert_profile(&txn, param.profile).await?;

        let now = Utc::now();
        let user = users::ActiveModel {
            id: Set(new_id()),
            username: Set(param.username),
            email: Set(param.email),
            profile_id: Set(profile.id),
            team_id: Set(param.team_id.map(String::from)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let mut roles: Vec<Role> = Vec::new();
        for role in param.roles.unwrap_or_else(|| vec![Role::User]) {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        for role in roles {
            let row = user_roles::ActiveModel {
                user_id: Set(user.id.clone()),
                role: Set(role),
                created_at: Set(now),
            };
            user_roles::Entity::insert(row)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        info!("Created user {} ({})", user.username, user.id);

        Ok(User::from(user))
    }

    /// Apply a partial update to a user and, when given, to its profile.
    pub async fn update_unique_user(
        &self,
        user_id: &str,
        param: UpdateUserInput,
    ) -> ApiResult<User> {
        let txn = self.db.begin().await?;

        if !claim_row::<users::Entity, _>(&txn, users::Column::Id, users::Column::UpdatedAt, user_id)
            .await?
        {
            return Err(ApiError::not_found("User", user_id));
        }

        let user = users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ApiError::not_found("User", user_id))?;
        let profile_id = user.profile_id.clone();

        let mut active: users::ActiveModel = user.into();
        patch(&mut active.username, param.username);
        patch(&mut active.email, param.email);
        patch_nullable(&mut active.team_id, param.team_id.map_value(String::from));
        active.updated_at = Set(Utc::now());
        let user = active.update(&txn).await?;

        if let Some(profile_patch) = param.profile {
            update_profile(&txn, &profile_id, profile_patch).await?;
        }

        txn.commit().await?;
        debug!("Updated user {}", user.id);

        Ok(User::from(user))
    }
}

async fn insert_profile(
    txn: &DatabaseTransaction,
    param: NewProfile,
) -> Result<profiles::Model, ApiError> {
    let address_id = match param.address {
        Some(address) => Some(insert_address(txn, address).await?.id),
        None => None,
    };

    let now = Utc::now();
    let profile = profiles::ActiveModel {
        id: Set(new_id()),
        status: Set(param.status),
        gender: Set(param.gender),
        satellite: Set(param.satellite),
        name_eng: Set(param.name_eng),
        name_chi: Set(param.name_chi),
        contact: Set(param.contact),
        dob: Set(param.dob),
        bio: Set(param.bio),
        tng_receipt_url: Set(param.tng_receipt_url),
        avatar_url: Set(param.avatar_url),
        address_id: Set(address_id),
        invited_by: Set(param.invited_by),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    Ok(profile)
}

async fn insert_address(
    txn: &DatabaseTransaction,
    param: NewAddress,
) -> Result<addresses::Model, ApiError> {
    let now = Utc::now();
    let address = addresses::ActiveModel {
        id: Set(new_id()),
        line1: Set(param.line1),
        line2: Set(param.line2),
        city: Set(param.city),
        state: Set(param.state),
        country: Set(param.country),
        postal_code: Set(param.postal_code),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(txn)
    .await?;

    Ok(address)
}

async fn update_profile(
    txn: &DatabaseTransaction,
    profile_id: &str,
    param: UpdateProfileInput,
) -> Result<profiles::Model, ApiError> {
    let profile = profiles::Entity::find_by_id(profile_id)
        .one(txn)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile", profile_id))?;

    let mut active: profiles::ActiveModel = profile.into();
    patch_nullable(&mut active.status, param.status);
    patch(&mut active.gender, param.gender);
    patch_nullable(&mut active.satellite, param.satellite);
    patch(&mut active.name_eng, param.name_eng);
    patch_nullable(&mut active.name_chi, param.name_chi);
    patch(&mut active.contact, param.contact);
    patch(&mut active.dob, param.dob);
    patch_nullable(&mut active.bio, param.bio);
    patch_nullable(&mut active.tng_receipt_url, param.tng_receipt_url);
    patch_nullable(&mut active.avatar_url, param.avatar_url);
    patch_nullable(&mut active.invited_by, param.invited_by);
    active.updated_at = Set(Utc::now());

    Ok(active.update(txn).await?)
}
