use std::sync::{Mutex, MutexGuard};

use chrono::NaiveTime;
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::models::game_match::{Match, NewMatch};
use crate::models::player::{NewPlayer, Player};
use crate::models::team::{NewTeam, Team};

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown player id: {0}")]
    UnknownPlayer(String),

    #[error("Unknown team id: {0}")]
    UnknownTeam(String),

    #[error("Team name '{0}' is already taken")]
    DuplicateTeamName(String),

    #[error("Winner {0} did not play in this match")]
    WinnerNotInMatch(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
struct StoreState {
    players: Vec<Player>,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

/// In-memory data behind the development backend. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct FantasyStore {
    state: Mutex<StoreState>,
}

impl FantasyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                players,
                ..StoreState::default()
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.lock()?.players.clone())
    }

    pub fn add_player(&self, new_player: NewPlayer) -> Result<Player, StoreError> {
        let player = Player::new(
            Uuid::new_v4().to_string(),
            new_player.name,
            new_player.role,
            new_player.score,
        );
        self.lock()?.players.push(player.clone());
        Ok(player)
    }

    pub fn teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.lock()?.teams.clone())
    }

    pub fn add_team(&self, new_team: NewTeam) -> Result<Team, StoreError> {
        let mut state = self.lock()?;

        let wanted = new_team.name.trim().to_lowercase();
        if state
            .teams
            .iter()
            .any(|t| t.name.trim().to_lowercase() == wanted)
        {
            return Err(StoreError::DuplicateTeamName(new_team.name));
        }

        if let Some(unknown) = new_team
            .players
            .iter()
            .find(|id| !state.players.iter().any(|p| &p.id == *id))
        {
            return Err(StoreError::UnknownPlayer(unknown.clone()));
        }

        let team = Team {
            id: Uuid::new_v4().to_string(),
            name: new_team.name,
            players: new_team.players,
        };
        state.teams.push(team.clone());
        Ok(team)
    }

    pub fn matches(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.lock()?.matches.clone())
    }

    pub fn add_match(&self, new_match: NewMatch) -> Result<Match, StoreError> {
        let mut state = self.lock()?;

        for team_id in &new_match.teams {
            if !state.teams.iter().any(|t| &t.id == team_id) {
                return Err(StoreError::UnknownTeam(team_id.clone()));
            }
        }

        let winner = Some(new_match.winner).filter(|w| !w.is_empty());
        if let Some(winner) = &winner {
            if !new_match.teams.contains(winner) {
                return Err(StoreError::WinnerNotInMatch(winner.clone()));
            }
        }

        let created = Match {
            id: Uuid::new_v4().to_string(),
            date: new_match.date.and_time(NaiveTime::MIN).and_utc(),
            teams: new_match.teams.to_vec(),
            winner,
        };
        state.matches.push(created.clone());
        Ok(created)
    }
}
