//! Invitation lifecycle tests

mod common;

use anyhow::Result;
use async_graphql::ID;
use common::*;
use sea_orm::{ConnectionTrait, EntityTrait};
use thebox::database::entities::{invitations, teams};
use thebox::graphql::types::NewInvitation;
use thebox::services::{InvitationService, Pagination, UserService};

fn invitation(team_id: &ID, to: &ID, from: Option<&ID>) -> NewInvitation {
    NewInvitation {
        team_id: team_id.clone(),
        to: to.clone(),
        from: from.cloned(),
    }
}

#[tokio::test]
async fn test_accept_moves_user_into_team() -> Result<()> {
    let db = setup_test_db().await?;
    let invitations_svc = InvitationService::new(db.clone());
    let users = UserService::new(db.clone());

    let team = create_team(&db, "Falcons").await?;
    let leader = create_user(&db, "leader").await?;
    let invitee = create_user(&db, "invitee").await?;
    assert_eq!(invitee.team_id, None);

    let created = invitations_svc
        .create_invitation(invitation(&team.id, &invitee.id, Some(&leader.id)))
        .await?;
    assert_eq!(created.from_id.as_deref(), Some(leader.id.as_str()));

    let pending = invitations_svc
        .get_many_user_invitations(Pagination::first(10), &invitee.id)
        .await?;
    assert_eq!(pending.len(), 1);

    assert!(invitations_svc.accept_invitation(&created.id).await?);

    let moved = users.get_unique_user(&invitee.id).await?;
    assert_eq!(moved.team_id.as_deref(), Some(team.id.as_str()));

    let err = invitations_svc
        .get_unique_invitation(&created.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_accept_missing_invitation_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let invitations_svc = InvitationService::new(db.clone());

    let err = invitations_svc
        .accept_invitation("no-such-invitation")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_reject_deletes_invitation() -> Result<()> {
    let db = setup_test_db().await?;
    let invitations_svc = InvitationService::new(db.clone());

    let team = create_team(&db, "Falcons").await?;
    let invitee = create_user(&db, "invitee").await?;
    let created = invitations_svc
        .create_invitation(invitation(&team.id, &invitee.id, None))
        .await?;
    assert_eq!(created.from_id, None);

    assert!(invitations_svc.reject_invitation(&created.id).await?);
    assert!(invitations::Entity::find_by_id(created.id.as_str())
        .one(&db)
        .await?
        .is_none());

    let err = invitations_svc
        .reject_invitation(&created.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}

#[tokio::test]
async fn test_invitation_to_unknown_team_is_rejected_by_database() -> Result<()> {
    let db = setup_test_db().await?;
    let invitations_svc = InvitationService::new(db.clone());
    let invitee = create_user(&db, "invitee").await?;

    let err = invitations_svc
        .create_invitation(invitation(&ID::from("no-such-team"), &invitee.id, None))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_REFERENCE");

    Ok(())
}

#[tokio::test]
async fn test_failed_accept_keeps_invitation() -> Result<()> {
    let db = setup_test_db().await?;
    let invitations_svc = InvitationService::new(db.clone());
    let users = UserService::new(db.clone());

    let team = create_team(&db, "Falcons").await?;
    let invitee = create_user(&db, "invitee").await?;
    let created = invitations_svc
        .create_invitation(invitation(&team.id, &invitee.id, None))
        .await?;

    // Remove the team behind the invitation's back so moving the user fails.
    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    teams::Entity::delete_by_id(team.id.as_str())
        .exec(&db)
        .await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

    let err = invitations_svc
        .accept_invitation(&created.id)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_REFERENCE");

    assert!(invitations::Entity::find_by_id(created.id.as_str())
        .one(&db)
        .await?
        .is_some());
    assert_eq!(users.get_unique_user(&invitee.id).await?.team_id, None);

    Ok(())
}
