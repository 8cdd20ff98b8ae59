// src/models/player.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category a player belongs to. Declaration order is the order in
/// which rosters are checked for missing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    Wicketkeeper,
    Captain,
    #[serde(rename = "Vice Captain")]
    ViceCaptain,
    Allrounder,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Batsman,
        Role::Bowler,
        Role::Wicketkeeper,
        Role::Captain,
        Role::ViceCaptain,
        Role::Allrounder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::Wicketkeeper => "Wicketkeeper",
            Role::Captain => "Captain",
            Role::ViceCaptain => "Vice Captain",
            Role::Allrounder => "Allrounder",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate player as served by `GET /players`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub score: f64,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role, score: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            score,
        }
    }
}

/// Request to add a candidate to the player pool
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub score: f64,
}
