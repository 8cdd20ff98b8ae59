// src/models/game_match.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A played match between two teams as served by `GET /matches`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub winner: Option<String>,
}

impl Match {
    pub fn home_team(&self) -> Option<&str> {
        self.teams.first().map(String::as_str)
    }

    pub fn away_team(&self) -> Option<&str> {
        self.teams.get(1).map(String::as_str)
    }

    /// Winner id, treating an empty string the same as no winner
    pub fn winner_id(&self) -> Option<&str> {
        self.winner.as_deref().filter(|w| !w.is_empty())
    }
}

/// Body of `POST /matches`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub date: NaiveDate,
    pub teams: [String; 2],
    pub winner: String,
}
