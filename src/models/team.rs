// src/models/team.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
}

/// Body of `POST /teams`: the team name and the selected player ids in
/// selection order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub players: Vec<String>,
}

/// A validated roster ready to be sent to the create-team endpoint
pub type RosterSubmission = NewTeam;
