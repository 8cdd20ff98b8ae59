use chrono::NaiveDate;
use reqwest::Client;
use serde_json::json;

use fantasy_cricket::models::game_match::NewMatch;
use fantasy_cricket::models::player::Role;
use fantasy_cricket::models::team::{NewTeam, Team};
use fantasy_cricket::services::api_client::{ApiError, FantasyApi};

mod common;
use common::utils::{player_pool, spawn_app, spawn_app_with_players, unreachable_api};

async fn create_team<A: FantasyApi>(api: &A, name: &str, players: &[&str]) -> Team {
    api.create_team(&NewTeam {
        name: name.to_string(),
        players: players.iter().map(|p| p.to_string()).collect(),
    })
    .await
    .expect("Failed to create team")
}

#[tokio::test]
async fn list_players_returns_seeded_pool() {
    let app = spawn_app().await;

    let players = app.api.list_players().await.expect("Failed to list players");

    assert_eq!(players, player_pool());
}

#[tokio::test]
async fn players_added_over_http_are_listed() {
    let app = spawn_app_with_players(vec![]).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/players", &app.address))
        .json(&json!({"name": "Ben Stokes", "role": "Allrounder", "score": 91}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let players = app.api.list_players().await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Ben Stokes");
    assert_eq!(players[0].role, Role::Allrounder);
    assert!(!players[0].id.is_empty());
}

#[tokio::test]
async fn team_with_unknown_player_is_a_bad_request() {
    let app = spawn_app().await;

    let result = app
        .api
        .create_team(&NewTeam { name: "Ghosts".into(), players: vec!["nobody".into()] })
        .await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("nobody"), "{}", message);
        }
        other => panic!("Expected a bad request, got {:?}", other),
    }
}

#[tokio::test]
async fn created_match_is_listed_with_midnight_date() {
    let app = spawn_app().await;
    let lions = create_team(&app.api, "Lions", &["bat1", "bowl1"]).await;
    let tigers = create_team(&app.api, "Tigers", &["bat2", "bowl2"]).await;

    let created = app
        .api
        .create_match(&NewMatch {
            date: NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
            teams: [lions.id.clone(), tigers.id.clone()],
            winner: tigers.id.clone(),
        })
        .await
        .expect("Failed to create match");

    assert_eq!(created.home_team(), Some(lions.id.as_str()));
    assert_eq!(created.winner_id(), Some(tigers.id.as_str()));
    assert_eq!(created.date.to_rfc3339(), "2024-04-12T00:00:00+00:00");

    let matches = app.api.list_matches().await.unwrap();
    assert_eq!(matches, vec![created]);
}

#[tokio::test]
async fn match_between_unknown_teams_is_rejected() {
    let app = spawn_app().await;

    let result = app
        .api
        .create_match(&NewMatch {
            date: NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
            teams: ["x".into(), "y".into()],
            winner: "x".into(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));
    assert!(app.api.list_matches().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_check_reflects_backend_availability() {
    let app = spawn_app().await;
    assert!(app.api.health_check().await);

    assert!(!unreachable_api().health_check().await);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let result = unreachable_api().list_players().await;
    assert!(matches!(result, Err(ApiError::NetworkError(_))));
}
