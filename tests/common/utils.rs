#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::net::TcpListener;

use fantasy_cricket::config::api::ApiSettings;
use fantasy_cricket::models::player::{Player, Role};
use fantasy_cricket::run;
use fantasy_cricket::services::api_client::FantasyApiClient;
use fantasy_cricket::services::store::FantasyStore;
use fantasy_cricket::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub api: FantasyApiClient,
}

/// Start the in-memory backend on a random port, preloaded with [`player_pool`].
pub async fn spawn_app() -> TestApp {
    spawn_app_with_players(player_pool()).await
}

pub async fn spawn_app_with_players(players: Vec<Player>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, FantasyStore::with_players(players))
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    let api = FantasyApiClient::new(&ApiSettings::new(address.clone(), 5))
        .expect("Failed to build API client");

    TestApp { address, api }
}

/// Client pointing at a port nothing listens on
pub fn unreachable_api() -> FantasyApiClient {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    FantasyApiClient::new(&ApiSettings::new(format!("http://127.0.0.1:{}", port), 2))
        .expect("Failed to build API client")
}

fn players(prefix: &str, name: &str, role: Role, count: usize) -> Vec<Player> {
    (1..=count)
        .map(|i| Player::new(format!("{}{}", prefix, i), format!("{} {}", name, i), role, 50.0 + i as f64))
        .collect()
}

/// Candidate pool with more players of every role than the quota allows:
/// batsmen `bat1..bat7`, bowlers `bowl1..bowl7`, keepers `wk1..wk2`,
/// captains `cap1..cap2`, vice captains `vc1..vc2`, allrounders `ar1..ar3`.
pub fn player_pool() -> Vec<Player> {
    let mut pool = Vec::new();
    pool.extend(players("bat", "Batsman", Role::Batsman, 7));
    pool.extend(players("bowl", "Bowler", Role::Bowler, 7));
    pool.extend(players("wk", "Keeper", Role::Wicketkeeper, 2));
    pool.extend(players("cap", "Captain", Role::Captain, 2));
    pool.extend(players("vc", "Vice", Role::ViceCaptain, 2));
    pool.extend(players("ar", "Allrounder", Role::Allrounder, 3));
    pool
}

/// Ids of a complete 11-player roster from [`player_pool`]:
/// 4 batsmen, 3 bowlers, one of each singleton role and one allrounder.
pub fn valid_roster_ids() -> Vec<&'static str> {
    vec![
        "bat1", "bat2", "bat3", "bat4",
        "bowl1", "bowl2", "bowl3",
        "wk1", "cap1", "vc1", "ar1",
    ]
}
