//! HTTP-level tests for the GraphQL endpoint

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use common::*;
use serde_json::{json, Value};
use thebox::config::{PaginationConfig, ServerConfig};
use thebox::server::app::create_app;

async fn setup_test_server(config: ServerConfig) -> Result<TestServer> {
    let db = setup_test_db().await?;
    let app = create_app(db, &config).await?;
    let server = TestServer::new(app)?;
    Ok(server)
}

async fn graphql(server: &TestServer, query: &str, variables: Value) -> Value {
    let response = server
        .post("/graphql")
        .json(&json!({ "query": query, "variables": variables }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "thebox-api");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_playground_can_be_disabled() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;
    let response = server.get("/graphql").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("GraphQL Playground"));

    let server = setup_test_server(ServerConfig {
        playground: false,
        ..ServerConfig::default()
    })
    .await?;
    let response = server.get("/graphql").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_create_and_fetch_team() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let created = graphql(
        &server,
        r#"mutation($param: NewTeam!) {
            createTeam(param: $param) { id name points }
        }"#,
        json!({ "param": { "name": "Falcons" } }),
    )
    .await;
    assert!(created.get("errors").is_none(), "{created}");
    let team = &created["data"]["createTeam"];
    assert_eq!(team["name"], "Falcons");
    assert_eq!(team["points"], 0.0);

    let fetched = graphql(
        &server,
        r#"query($teamId: ID!) {
            team(teamId: $teamId) { name cluster { id } members { id } }
            teamCount
        }"#,
        json!({ "teamId": team["id"] }),
    )
    .await;
    assert!(fetched.get("errors").is_none(), "{fetched}");
    assert_eq!(fetched["data"]["team"]["name"], "Falcons");
    assert!(fetched["data"]["team"]["cluster"].is_null());
    assert_eq!(fetched["data"]["team"]["members"], json!([]));
    assert_eq!(fetched["data"]["teamCount"], 1);

    Ok(())
}

#[tokio::test]
async fn test_teams_page() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    for name in ["Falcons", "Hawks", "Owls", "Ravens"] {
        graphql(
            &server,
            r#"mutation($param: NewTeam!) { createTeam(param: $param) { id } }"#,
            json!({ "param": { "name": name } }),
        )
        .await;
    }

    let page = graphql(
        &server,
        r#"{ teams(page: { limit: 2 }) { name } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        page["data"]["teams"],
        json!([{ "name": "Falcons" }, { "name": "Hawks" }])
    );

    Ok(())
}

#[tokio::test]
async fn test_limit_above_max_is_capped() -> Result<()> {
    let server = setup_test_server(ServerConfig {
        pagination: PaginationConfig { max_limit: 2 },
        ..ServerConfig::default()
    })
    .await?;

    for name in ["Falcons", "Hawks", "Owls"] {
        graphql(
            &server,
            r#"mutation($param: NewTeam!) { createTeam(param: $param) { id } }"#,
            json!({ "param": { "name": name } }),
        )
        .await;
    }

    let page = graphql(
        &server,
        r#"{ teams(page: { limit: 100 }) { name } teamCount }"#,
        json!({}),
    )
    .await;
    assert!(page.get("errors").is_none(), "{page}");
    assert_eq!(
        page["data"]["teams"],
        json!([{ "name": "Falcons" }, { "name": "Hawks" }])
    );
    assert_eq!(page["data"]["teamCount"], 3);

    let rest = graphql(
        &server,
        r#"{ teams(page: { limit: 100, offset: 2 }) { name } }"#,
        json!({}),
    )
    .await;
    assert_eq!(rest["data"]["teams"], json!([{ "name": "Owls" }]));

    Ok(())
}

#[tokio::test]
async fn test_missing_team_reports_not_found() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let body = graphql(
        &server,
        r#"{ team(teamId: "no-such-team") { id } }"#,
        json!({}),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_battleground_round_is_not_implemented() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let body = graphql(
        &server,
        r#"{ battlegroundRound(code: "ABCD", round: 1) { round } }"#,
        json!({}),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_IMPLEMENTED");

    Ok(())
}

#[tokio::test]
async fn test_battleground_room_lifecycle() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let created = graphql(
        &server,
        r#"mutation { createBattlegroundRoom(param: { code: "ROOM1" }) { code round started } }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        created["data"]["createBattlegroundRoom"],
        json!({ "code": "ROOM1", "round": 0, "started": false })
    );

    let updated = graphql(
        &server,
        r#"mutation {
            updateBattlegroundRoom(code: "ROOM1", param: { round: 2, started: true }) { round started }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(
        updated["data"]["updateBattlegroundRoom"],
        json!({ "round": 2, "started": true })
    );

    let fetched = graphql(
        &server,
        r#"{ battlegroundRoom(code: "ROOM1") { round } battlegroundRooms(page: { limit: 10 }) { code } }"#,
        json!({}),
    )
    .await;
    assert_eq!(fetched["data"]["battlegroundRoom"]["round"], 2);
    assert_eq!(fetched["data"]["battlegroundRooms"], json!([{ "code": "ROOM1" }]));

    Ok(())
}

#[tokio::test]
async fn test_user_with_roles_through_api() -> Result<()> {
    let server = setup_test_server(ServerConfig::default()).await?;

    let created = graphql(
        &server,
        r#"mutation($param: NewUser!) {
            createUser(param: $param) { id username roles team { id } profile { nameEng } }
        }"#,
        json!({
            "param": {
                "username": "ada",
                "email": "ada@thebox.test",
                "roles": ["FACILITATOR"],
                "profile": {
                    "gender": "FEMALE",
                    "nameEng": "Ada",
                    "contact": "+65 8123 4567",
                    "dob": "2001-04-12T00:00:00Z"
                }
            }
        }),
    )
    .await;
    assert!(created.get("errors").is_none(), "{created}");
    let user = &created["data"]["createUser"];
    assert_eq!(user["roles"], json!(["FACILITATOR"]));
    assert!(user["team"].is_null());
    assert_eq!(user["profile"]["nameEng"], "Ada");

    let body = graphql(
        &server,
        r#"query($userId: ID!) { user(userId: $userId) { profile { address { city } } } }"#,
        json!({ "userId": user["id"] }),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "PRECONDITION_FAILED");

    let body = graphql(&server, "{ userCount }", json!({})).await;
    assert_eq!(body["data"]["userCount"], 1);

    Ok(())
}
