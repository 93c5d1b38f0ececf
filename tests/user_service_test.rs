//! User and profile service tests

mod common;

use std::collections::HashSet;

use anyhow::Result;
use async_graphql::MaybeUndefined;
use common::*;
use thebox::database::entities::{Role, Satellite};
use thebox::errors::ApiError;
use thebox::graphql::types::{NewAddress, UpdateProfileInput, UpdateUserInput};
use thebox::services::{Pagination, UserService};

#[tokio::test]
async fn test_created_users_have_distinct_ids() -> Result<()> {
    let db = setup_test_db().await?;
    let users = UserService::new(db.clone());

    let mut ids = HashSet::new();
    for name in ["ada", "grace", "linus"] {
        let user = create_user(&db, name).await?;
        assert!(!user.id.is_empty());
        ids.insert(String::from(user.id));
    }
    assert_eq!(ids.len(), 3);
    assert_eq!(users.count_users().await?, 3);

    let listed = users.get_many_user(Pagination::first(2)).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].username, "ada");

    Ok(())
}

#[tokio::test]
async fn test_roles_default_and_deduplicate() -> Result<()> {
    let db = setup_test_db().await?;
    let users = UserService::new(db.clone());

    let plain = create_user(&db, "plain").await?;
    assert_eq!(users.get_many_roles(&plain.id).await?, vec![Role::User]);

    let mut staff = new_user("staff");
    staff.roles = Some(vec![Role::Facilitator, Role::Admin, Role::Facilitator]);
    let staff = users.create_user(staff).await?;

    let roles = users.get_many_roles(&staff.id).await?;
    assert_eq!(roles.len(), 2);
    assert!(roles.contains(&Role::Admin));
    assert!(roles.contains(&Role::Facilitator));

    Ok(())
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() -> Result<()> {
    let db = setup_test_db().await?;
    let users = UserService::new(db.clone());
    create_user(&db, "ada").await?;

    let mut duplicate = new_user("ada");
    duplicate.email = "other@thebox.test".to_string();
    let err = users.create_user(duplicate).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(users.count_users().await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_profile_address() -> Result<()> {
    let db = setup_test_db().await?;
    let users = UserService::new(db.clone());

    let homeless = create_user(&db, "nomad").await?;
    let profile = users.get_unique_profile(&homeless.profile_id).await?;
    let err = users.get_profile_address(&profile).await.unwrap_err();
    assert!(matches!(err, ApiError::Precondition(_)));
    assert_eq!(err.error_code(), "PRECONDITION_FAILED");

    let mut housed = new_user("settler");
    housed.profile.address = Some(NewAddress {
        line1: "1 Marina Boulevard".to_string(),
        line2: None,
        city: "Singapore".to_string(),
        state: "Central".to_string(),
        country: "SG".to_string(),
        postal_code: "018989".to_string(),
    });
    let housed = users.create_user(housed).await?;
    let profile = users.get_unique_profile(&housed.profile_id).await?;
    let address = users.get_profile_address(&profile).await?;
    assert_eq!(address.postal_code, "018989");

    Ok(())
}

#[tokio::test]
async fn test_partial_update_of_user_and_profile() -> Result<()> {
    let db = setup_test_db().await?;
    let users = UserService::new(db.clone());
    let team = create_team(&db, "Falcons").await?;
    let user = create_user(&db, "ada").await?;

    let updated = users
        .update_unique_user(
            &user.id,
            UpdateUserInput {
                team_id: MaybeUndefined::Value(team.id.clone()),
                profile: Some(UpdateProfileInput {
                    satellite: MaybeUndefined::Value(Satellite::East),
                    bio: MaybeUndefined::Value("Puzzle enjoyer".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.username, "ada");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.team_id.as_deref(), Some(team.id.as_str()));

    let profile = users.get_unique_profile(&updated.profile_id).await?;
    assert_eq!(profile.name_eng, "ada");
    assert_eq!(profile.satellite, Some(Satellite::East));
    assert_eq!(profile.bio.as_deref(), Some("Puzzle enjoyer"));

    let left = users
        .update_unique_user(
            &user.id,
            UpdateUserInput {
                team_id: MaybeUndefined::Null,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(left.team_id, None);

    let err = users
        .update_unique_user("no-such-user", UpdateUserInput::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}
