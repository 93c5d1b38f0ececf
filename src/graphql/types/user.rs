use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::database::entities::{addresses, profiles, users, Gender, PastoralStatus, Role, Satellite};
use crate::errors::ResultExt;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Team;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
    #[graphql(skip)]
    pub profile_id: String,
    #[graphql(skip)]
    pub team_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: ID::from(model.id),
            username: model.username,
            email: model.email,
            profile_id: model.profile_id,
            team_id: model.team_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl User {
    async fn profile(&self, ctx: &Context<'_>) -> Result<Profile> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_unique_profile(&self.profile_id)
            .await
            .to_graphql_result()
    }

    async fn team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        let Some(team_id) = self.team_id.as_deref() else {
            return Ok(None);
        };
        let context = ctx.data::<GraphQLContext>()?;
        context
            .teams
            .get_unique_team(team_id)
            .await
            .map(Some)
            .to_graphql_result()
    }

    async fn roles(&self, ctx: &Context<'_>) -> Result<Vec<Role>> {
        let context = ctx.data::<GraphQLContext>()?;
        context.users.get_many_roles(&self.id).await.to_graphql_result()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: ID,
    pub status: Option<PastoralStatus>,
    pub gender: Gender,
    pub satellite: Option<Satellite>,
    pub name_eng: String,
    pub name_chi: Option<String>,
    pub contact: String,
    pub dob: DateTime<Utc>,
    pub bio: Option<String>,
    pub tng_receipt_url: Option<String>,
    pub avatar_url: Option<String>,
    pub invited_by: Option<String>,
    #[graphql(skip)]
    pub address_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: ID::from(model.id),
            status: model.status,
            gender: model.gender,
            satellite: model.satellite,
            name_eng: model.name_eng,
            name_chi: model.name_chi,
            contact: model.contact,
            dob: model.dob,
            bio: model.bio,
            tng_receipt_url: model.tng_receipt_url,
            avatar_url: model.avatar_url,
            invited_by: model.invited_by,
            address_id: model.address_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[ComplexObject]
impl Profile {
    /// Fails when the profile was registered without an address
    async fn address(&self, ctx: &Context<'_>) -> Result<Address> {
        let context = ctx.data::<GraphQLContext>()?;
        context
            .users
            .get_profile_address(self)
            .await
            .to_graphql_result()
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Address {
    pub id: ID,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<addresses::Model> for Address {
    fn from(model: addresses::Model) -> Self {
        Self {
            id: ID::from(model.id),
            line1: model.line1,
            line2: model.line2,
            city: model.city,
            state: model.state,
            country: model.country,
            postal_code: model.postal_code,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewAddress {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(InputObject, Clone, Debug)]
pub struct NewProfile {
    pub status: Option<PastoralStatus>,
    pub gender: Gender,
    pub satellite: Option<Satellite>,
    pub name_eng: String,
    pub name_chi: Option<String>,
    pub contact: String,
    pub dob: DateTime<Utc>,
    pub bio: Option<String>,
    pub tng_receipt_url: Option<String>,
    pub avatar_url: Option<String>,
    pub invited_by: Option<String>,
    pub address: Option<NewAddress>,
}

#[derive(InputObject, Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Defaults to `[USER]`
    pub roles: Option<Vec<Role>>,
    pub team_id: Option<ID>,
    pub profile: NewProfile,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UpdateProfileInput {
    pub status: MaybeUndefined<PastoralStatus>,
    pub gender: Option<Gender>,
    pub satellite: MaybeUndefined<Satellite>,
    pub name_eng: Option<String>,
    pub name_chi: MaybeUndefined<String>,
    pub contact: Option<String>,
    pub dob: Option<DateTime<Utc>>,
    pub bio: MaybeUndefined<String>,
    pub tng_receipt_url: MaybeUndefined<String>,
    pub avatar_url: MaybeUndefined<String>,
    pub invited_by: MaybeUndefined<String>,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub team_id: MaybeUndefined<ID>,
    pub profile: Option<UpdateProfileInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_profile_mapping_keeps_every_field() {
        let now = Utc::now();
        let dob = Utc.with_ymd_and_hms(1999, 4, 1, 0, 0, 0).unwrap();
        let model = profiles::Model {
            id: "p-1".to_string(),
            status: Some(PastoralStatus::Member),
            gender: Gender::Female,
            satellite: None,
            name_eng: "Grace Tan".to_string(),
            name_chi: Some("陈恩典".to_string()),
            contact: "+60123456789".to_string(),
            dob,
            bio: None,
            tng_receipt_url: Some("https://cdn.example.com/r.png".to_string()),
            avatar_url: None,
            address_id: Some("a-1".to_string()),
            invited_by: Some("u-9".to_string()),
            created_at: now,
            updated_at: now,
        };

        let profile = Profile::from(model);
        assert_eq!(profile.id, ID::from("p-1"));
        assert_eq!(profile.status, Some(PastoralStatus::Member));
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.name_chi.as_deref(), Some("陈恩典"));
        assert_eq!(profile.dob, dob);
        assert_eq!(profile.address_id.as_deref(), Some("a-1"));
        assert_eq!(profile.invited_by.as_deref(), Some("u-9"));
    }

    #[test]
    fn test_user_mapping_keeps_references() {
        let now = Utc::now();
        let user = User::from(users::Model {
            id: "u-1".to_string(),
            username: "grace".to_string(),
            email: "grace@example.com".to_string(),
            profile_id: "p-1".to_string(),
            team_id: None,
            created_at: now,
            updated_at: now,
        });

        assert_eq!(user.id, ID::from("u-1"));
        assert_eq!(user.profile_id, "p-1");
        assert_eq!(user.team_id, None);
        assert_eq!(user.created_at, now);
    }
}
