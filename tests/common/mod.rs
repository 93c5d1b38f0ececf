//! Shared fixtures for integration tests

#![allow(dead_code)]

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use thebox::database::entities::{clusters, missions, Gender};
use thebox::database::{establish_connection, migrations::Migrator};
use thebox::graphql::types::{NewProfile, NewTeam, NewUser, Team, User};
use thebox::services::{new_id, TeamService, UserService};

/// Fresh in-memory database with every migration applied
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = establish_connection("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn new_profile(name: &str) -> NewProfile {
    NewProfile {
        status: None,
        gender: Gender::Female,
        satellite: None,
        name_eng: name.to_string(),
        name_chi: None,
        contact: "+65 8123 4567".to_string(),
        dob: Utc.with_ymd_and_hms(2001, 4, 12, 0, 0, 0).unwrap(),
        bio: None,
        tng_receipt_url: None,
        avatar_url: None,
        invited_by: None,
        address: None,
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@thebox.test", username),
        roles: None,
        team_id: None,
        profile: new_profile(username),
    }
}

pub async fn create_user(db: &DatabaseConnection, username: &str) -> Result<User> {
    Ok(UserService::new(db.clone())
        .create_user(new_user(username))
        .await?)
}

pub async fn create_team(db: &DatabaseConnection, name: &str) -> Result<Team> {
    Ok(TeamService::new(db.clone())
        .create_team(NewTeam {
            name: name.to_string(),
            avatar_url: None,
            cluster_id: None,
        })
        .await?)
}

pub async fn insert_cluster(db: &DatabaseConnection, name: &str) -> Result<clusters::Model> {
    let now = Utc::now();
    let cluster = clusters::ActiveModel {
        id: Set(new_id()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(cluster)
}

pub async fn insert_mission(
    db: &DatabaseConnection,
    slug: &str,
    points: f64,
) -> Result<missions::Model> {
    let now = Utc::now();
    let mission = missions::ActiveModel {
        id: Set(new_id()),
        title: Set(slug.replace('-', " ")),
        slug: Set(slug.to_string()),
        description: Set(None),
        points: Set(points),
        start_at: Set(now),
        end_at: Set(now + Duration::hours(2)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(mission)
}
