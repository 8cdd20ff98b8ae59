//! Command-line front end for the fantasy backend.

use std::net::TcpListener;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error as ThisError;

use crate::config::settings::Settings;
use crate::models::player::NewPlayer;
use crate::run;
use crate::services::api_client::{ApiError, FantasyApi, FantasyApiClient};
use crate::services::store::{FantasyStore, StoreError};
use crate::views::matches::{DraftField, MatchesView};
use crate::views::notice::{Notice, NoticeLevel};
use crate::views::team_creation::TeamCreationView;

/// Fantasy cricket - pick rosters and record matches
#[derive(Parser, Debug)]
#[command(name = "fantasy")]
#[command(about = "Fantasy cricket team builder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend URL, overrides `api.base_url` from the configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the in-memory development backend
    Serve {
        /// JSON file with players to preload
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Show the player pool and remaining role capacity
    Players,

    /// List created teams
    Teams,

    /// List matches
    Matches,

    /// Build a roster from player ids and submit it
    CreateTeam {
        /// Team name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Player ids, in selection order
        players: Vec<String>,
    },

    /// Record a match between two teams
    CreateMatch {
        /// Match date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// First team id
        #[arg(long)]
        team1: String,

        /// Second team id
        #[arg(long)]
        team2: String,

        /// Winning team id
        #[arg(long)]
        winner: String,
    },
}

#[derive(ThisError, Debug)]
pub enum CliError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to start server: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read seed file: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Failed to seed players: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Rejected(String),
}

pub async fn execute(cli: Cli, settings: Settings) -> Result<(), CliError> {
    let mut api_settings = settings.api.clone();
    if let Some(base_url) = cli.base_url {
        api_settings.base_url = base_url;
    }

    match cli.command {
        Command::Serve { seed } => serve(&settings, seed.as_deref()).await,
        command => {
            let api = FantasyApiClient::new(&api_settings)?;
            run_client_command(command, &api).await
        }
    }
}

async fn serve(settings: &Settings, seed: Option<&Path>) -> Result<(), CliError> {
    let store = FantasyStore::new();
    if let Some(path) = seed {
        let contents = std::fs::read_to_string(path)?;
        let players: Vec<NewPlayer> = serde_json::from_str(&contents)?;
        for player in players {
            store.add_player(player)?;
        }
        tracing::info!("Seeded players from {}", path.display());
    }

    let address = settings.server.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Fantasy backend listening on {}", address);
    run(listener, store)?.await?;
    Ok(())
}

async fn run_client_command<A: FantasyApi>(command: Command, api: &A) -> Result<(), CliError> {
    match command {
        Command::Players => {
            let mut view = TeamCreationView::new();
            view.mount(api).await;
            print_notices(&view.take_notices());
            print_lines(&view.render());
        }
        Command::Teams => {
            let teams = api.list_teams().await?;
            if teams.is_empty() {
                println!("No teams available");
            }
            for team in teams {
                println!("{} ({}): {} players", team.name, team.id, team.players.len());
            }
        }
        Command::Matches => {
            let mut view = MatchesView::new();
            view.load(api).await;
            print_notices(&view.take_notices());
            print_lines(&view.render());
        }
        Command::CreateTeam { name, players } => {
            let mut view = TeamCreationView::new();
            view.mount(api).await;
            view.set_team_name(name);
            for player_id in &players {
                if view.selector().player(player_id).is_none() {
                    eprintln!("Skipping unknown player {}", player_id);
                    continue;
                }
                if view.selector().is_selected(player_id) {
                    continue;
                }
                view.select(player_id);
            }
            let created = view.create_team(api).await;
            let notices = view.take_notices();
            print_notices(&notices);
            if created.is_none() {
                return Err(CliError::Rejected(last_message(&notices, "Team was not created")));
            }
        }
        Command::CreateMatch { date, team1, team2, winner } => {
            let mut view = MatchesView::new();
            view.load(api).await;
            view.set_field(DraftField::Date, date);
            view.set_field(DraftField::Team1, team1);
            view.set_field(DraftField::Team2, team2);
            view.set_field(DraftField::Winner, winner);
            let created = view.create_match(api).await;
            let notices = view.take_notices();
            print_notices(&notices);
            if created.is_none() {
                return Err(CliError::Rejected(last_message(&notices, "Match was not created")));
            }
            print_lines(&view.render());
        }
        Command::Serve { .. } => {
            return Err(CliError::Rejected("serve does not talk to a backend".to_string()));
        }
    }
    Ok(())
}

fn last_message(notices: &[Notice], fallback: &str) -> String {
    notices
        .last()
        .map(|n| n.message.clone())
        .unwrap_or_else(|| fallback.to_string())
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice),
            NoticeLevel::Warning | NoticeLevel::Error => eprintln!("{}", notice),
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
