//! Team, cluster and mission service tests

mod common;

use anyhow::Result;
use async_graphql::{MaybeUndefined, ID};
use common::*;
use thebox::errors::ApiError;
use thebox::graphql::types::{NewTeam, UpdateTeamInput};
use thebox::services::{ClusterService, MissionService, Pagination, TeamService, UserService};

#[tokio::test]
async fn test_create_team_starts_with_zero_points() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());

    let team = create_team(&db, "Falcons").await?;
    assert!(!team.id.is_empty());
    assert_eq!(team.points, 0.0);
    assert_eq!(team.powercard, None);

    let fetched = teams.get_unique_team(&team.id).await?;
    assert_eq!(fetched.name, "Falcons");
    assert_eq!(fetched.points, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_teams_are_paginated_in_insertion_order() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());

    for name in ["Falcons", "Hawks", "Owls", "Ravens"] {
        create_team(&db, name).await?;
    }

    let page = teams.get_many_team(Pagination::new(2, 0)).await?;
    let names: Vec<_> = page.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Falcons", "Hawks"]);

    let page = teams.get_many_team(Pagination::new(2, 2)).await?;
    let names: Vec<_> = page.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Owls", "Ravens"]);

    assert_eq!(teams.count_teams().await?, 4);

    Ok(())
}

#[tokio::test]
async fn test_missing_team_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());

    let err = teams.get_unique_team("no-such-team").await.unwrap_err();
    assert!(err.is_not_found());

    let err = teams
        .update_unique_team("no-such-team", UpdateTeamInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound { entity: "Team", .. }));

    Ok(())
}

#[tokio::test]
async fn test_partial_update_keeps_unsupplied_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());
    let cluster = insert_cluster(&db, "North").await?;

    let team = teams
        .create_team(NewTeam {
            name: "Falcons".to_string(),
            avatar_url: Some("https://cdn.thebox.test/falcons.png".to_string()),
            cluster_id: Some(ID::from(cluster.id.clone())),
        })
        .await?;

    let updated = teams
        .update_unique_team(
            &team.id,
            UpdateTeamInput {
                points: Some(42.5),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.points, 42.5);
    assert_eq!(updated.name, "Falcons");
    assert_eq!(updated.avatar_url, team.avatar_url);
    assert_eq!(updated.cluster_id.as_deref(), Some(cluster.id.as_str()));
    assert!(updated.updated_at >= team.updated_at);

    let cleared = teams
        .update_unique_team(
            &team.id,
            UpdateTeamInput {
                avatar_url: MaybeUndefined::Null,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(cleared.avatar_url, None);
    assert_eq!(cleared.points, 42.5);

    Ok(())
}

#[tokio::test]
async fn test_cluster_teams_and_members() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());
    let users = UserService::new(db.clone());
    let cluster = insert_cluster(&db, "North").await?;

    let falcons = teams
        .create_team(NewTeam {
            name: "Falcons".to_string(),
            avatar_url: None,
            cluster_id: Some(ID::from(cluster.id.clone())),
        })
        .await?;
    create_team(&db, "Loners").await?;

    let fetched = ClusterService::new(db.clone())
        .get_unique_cluster(&cluster.id)
        .await?;
    assert_eq!(fetched.name, "North");

    let cluster_teams = teams
        .get_many_cluster_teams(Pagination::first(50), &cluster.id)
        .await?;
    assert_eq!(cluster_teams.len(), 1);
    assert_eq!(cluster_teams[0].id, falcons.id);

    let mut member = new_user("ada");
    member.team_id = Some(falcons.id.clone());
    users.create_user(member).await?;
    create_user(&db, "grace").await?;

    let members = users
        .get_many_team_members(Pagination::first(100), &falcons.id)
        .await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].username, "ada");

    Ok(())
}

#[tokio::test]
async fn test_complete_mission_awards_points_once() -> Result<()> {
    let db = setup_test_db().await?;
    let teams = TeamService::new(db.clone());
    let missions = MissionService::new(db.clone());

    let team = create_team(&db, "Falcons").await?;
    let mission = insert_mission(&db, "escape-room", 120.0).await?;

    let team = teams.complete_mission(&team.id, &mission.id).await?;
    assert_eq!(team.points, 120.0);

    let completed = missions
        .get_many_completed_by_team(Pagination::first(10), &team.id)
        .await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].slug, "escape-room");

    let completed_by = teams
        .get_many_completed_mission(Pagination::first(50), &mission.id)
        .await?;
    assert_eq!(completed_by.len(), 1);
    assert_eq!(completed_by[0].id, team.id);

    let err = teams
        .complete_mission(&team.id, &mission.id)
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(teams.get_unique_team(&team.id).await?.points, 120.0);

    Ok(())
}
