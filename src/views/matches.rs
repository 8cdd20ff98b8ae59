use std::fmt;

use chrono::NaiveDate;
use thiserror::Error as ThisError;

use crate::models::game_match::{Match, NewMatch};
use crate::models::team::Team;
use crate::services::api_client::{ApiError, FantasyApi};
use crate::views::notice::Notice;

const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Date,
    Team1,
    Team2,
    Winner,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Date => "date",
            DraftField::Team1 => "team1",
            DraftField::Team2 => "team2",
            DraftField::Winner => "winner",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please fill in the {0} field.")]
    MissingField(DraftField),

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Contents of the "Create a New Match" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDraft {
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub winner: String,
}

impl MatchDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Date => self.date = value,
            DraftField::Team1 => self.team1 = value,
            DraftField::Team2 => self.team2 = value,
            DraftField::Winner => self.winner = value,
        }
    }

    /// Every field is required; the date must be a calendar date.
    pub fn to_new_match(&self) -> Result<NewMatch, DraftError> {
        let fields = [
            (DraftField::Date, &self.date),
            (DraftField::Team1, &self.team1),
            (DraftField::Team2, &self.team2),
            (DraftField::Winner, &self.winner),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(DraftError::MissingField(*field));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;

        Ok(NewMatch {
            date,
            teams: [self.team1.clone(), self.team2.clone()],
            winner: self.winner.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// State behind the "Matches" screen
#[derive(Debug, Clone)]
pub struct MatchesView {
    matches: Vec<Match>,
    teams: Vec<Team>,
    loading: bool,
    draft: MatchDraft,
    notices: Vec<Notice>,
}

impl Default for MatchesView {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchesView {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            teams: Vec::new(),
            loading: true,
            draft: MatchDraft::default(),
            notices: Vec::new(),
        }
    }

    /// Fetch matches and teams. Either both lists are replaced or neither.
    #[tracing::instrument(name = "Load matches view", skip(self, api))]
    pub async fn load<A: FantasyApi>(&mut self, api: &A) {
        match fetch_matches_and_teams(api).await {
            Ok((matches, teams)) => {
                tracing::info!("Loaded {} matches and {} teams", matches.len(), teams.len());
                self.matches = matches;
                self.teams = teams;
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                self.notices.push(Notice::error(format!("Could not load matches: {}", e)));
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn draft(&self) -> &MatchDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Submit the form. On success the match is appended and the form cleared;
    /// otherwise the form is kept as typed.
    pub async fn create_match<A: FantasyApi>(&mut self, api: &A) -> Option<Match> {
        let new_match = match self.draft.to_new_match() {
            Ok(new_match) => new_match,
            Err(e) => {
                self.notices.push(Notice::warning(e.to_string()));
                return None;
            }
        };

        match api.create_match(&new_match).await {
            Ok(created) => {
                self.matches.push(created.clone());
                self.draft.clear();
                self.notices.push(Notice::info("Match created successfully!"));
                Some(created)
            }
            Err(e) => {
                tracing::error!("Error creating match: {}", e);
                self.notices.push(Notice::error(format!("Error creating match: {}", e)));
                None
            }
        }
    }

    pub fn team_name(&self, team_id: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.as_str())
    }

    fn display_team(&self, team_id: Option<&str>) -> &str {
        team_id
            .and_then(|id| self.team_name(id))
            .unwrap_or(UNKNOWN_TEAM)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec!["Matches".to_string()];
        if self.loading {
            lines.push("Loading...".to_string());
        } else if self.matches.is_empty() {
            lines.push("No matches available".to_string());
        } else {
            for m in &self.matches {
                let winner = match m.winner_id() {
                    Some(id) => self.display_team(Some(id)),
                    None => "N/A",
                };
                lines.push(format!(
                    "{}: {} vs {} | Winner: {}",
                    m.date.format("%Y-%m-%d %H:%M"),
                    self.display_team(m.home_team()),
                    self.display_team(m.away_team()),
                    winner
                ));
            }
        }
        lines
    }
}

async fn fetch_matches_and_teams<A: FantasyApi>(
    api: &A,
) -> Result<(Vec<Match>, Vec<Team>), ApiError> {
    let matches = api.list_matches().await?;
    let teams = api.list_teams().await?;
    Ok((matches, teams))
}
