use fantasy_cricket::models::player::Role;
use fantasy_cricket::roster::{quota_for, RosterSelector, SubmitError, ValidationError};
use fantasy_cricket::services::api_client::{ApiError, FantasyApi};

mod common;
use common::utils::{player_pool, spawn_app, unreachable_api, valid_roster_ids};

async fn loaded_selector<A: FantasyApi>(api: &A) -> RosterSelector {
    let players = api.list_players().await.expect("Failed to load players");
    RosterSelector::with_players(players)
}

fn pick_valid_roster(selector: &mut RosterSelector) {
    for id in valid_roster_ids() {
        selector.toggle(id).expect("Failed to select player");
    }
}

#[tokio::test]
async fn submitting_valid_roster_creates_team_and_resets() {
    let app = spawn_app().await;
    let mut selector = loaded_selector(&app.api).await;
    selector.set_team_name("Kolkata Kings");
    pick_valid_roster(&mut selector);

    let team = selector.submit(&app.api).await.expect("Failed to create team");

    assert_eq!(team.name, "Kolkata Kings");
    assert_eq!(team.players, valid_roster_ids());
    assert!(selector.selected().is_empty());
    assert_eq!(selector.team_name(), "");
    assert!(!selector.is_submitting());
    for role in Role::ALL {
        assert_eq!(selector.remaining(role), quota_for(role));
    }

    let teams = app.api.list_teams().await.expect("Failed to list teams");
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, team.id);
}

#[tokio::test]
async fn rejected_submission_keeps_selection() {
    let app = spawn_app().await;

    let mut first = loaded_selector(&app.api).await;
    first.set_team_name("Rajasthan Royals");
    pick_valid_roster(&mut first);
    first.submit(&app.api).await.expect("Failed to create first team");

    let mut second = loaded_selector(&app.api).await;
    second.set_team_name("rajasthan royals");
    pick_valid_roster(&mut second);
    let before = second.selected_ids();

    let result = second.submit(&app.api).await;

    match result {
        Err(SubmitError::SubmissionFailed(ApiError::Status { status, .. })) => {
            assert_eq!(status, 409)
        }
        other => panic!("Expected a conflict, got {:?}", other),
    }
    assert_eq!(second.selected_ids(), before);
    assert_eq!(second.team_name(), "rajasthan royals");
    assert!(!second.is_submitting());

    let teams = app.api.list_teams().await.unwrap();
    assert_eq!(teams.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_surfaces_submission_failure() {
    let api = unreachable_api();
    let mut selector = RosterSelector::with_players(player_pool());
    pick_valid_roster(&mut selector);

    let result = selector.submit(&api).await;

    assert!(matches!(
        result,
        Err(SubmitError::SubmissionFailed(ApiError::NetworkError(_)))
    ));
    assert_eq!(selector.selected().len(), valid_roster_ids().len());
    assert!(!selector.is_submitting());
}

#[tokio::test]
async fn incomplete_roster_is_never_sent() {
    let app = spawn_app().await;
    let mut selector = loaded_selector(&app.api).await;
    for id in ["bat1", "bowl1", "wk1", "cap1", "vc1", "ar1"] {
        selector.toggle(id).unwrap();
    }

    let result = selector.submit(&app.api).await;

    assert!(matches!(
        result,
        Err(SubmitError::Invalid(ValidationError::WrongCount { expected: 11, actual: 6 }))
    ));
    assert!(app.api.list_teams().await.unwrap().is_empty());
}
