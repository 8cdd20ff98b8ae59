use crate::models::team::Team;
use crate::roster::errors::{SelectionError, SubmitError};
use crate::roster::quota::ROLE_QUOTA;
use crate::roster::selector::RosterSelector;
use crate::services::api_client::FantasyApi;
use crate::views::notice::Notice;

/// State behind the "Create Team" screen
#[derive(Debug, Clone)]
pub struct TeamCreationView {
    selector: RosterSelector,
    loading: bool,
    notices: Vec<Notice>,
}

impl Default for TeamCreationView {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamCreationView {
    pub fn new() -> Self {
        Self {
            selector: RosterSelector::new(),
            loading: true,
            notices: Vec::new(),
        }
    }

    /// Load the candidate pool. A failed load leaves an empty pool.
    #[tracing::instrument(name = "Mount team creation view", skip(self, api))]
    pub async fn mount<A: FantasyApi>(&mut self, api: &A) {
        match api.list_players().await {
            Ok(players) => {
                tracing::info!("Loaded {} players", players.len());
                self.selector.set_players(players);
            }
            Err(e) => {
                tracing::error!("Error fetching players: {}", e);
                self.notices.push(Notice::error(format!("Could not load players: {}", e)));
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selector(&self) -> &RosterSelector {
        &self.selector
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.selector.set_team_name(name);
    }

    /// Toggle a player. Returns whether the selection changed.
    pub fn select(&mut self, player_id: &str) -> bool {
        match self.selector.toggle(player_id) {
            Ok(_) => true,
            Err(e @ SelectionError::CapacityExceeded { .. }) => {
                self.notices.push(Notice::warning(e.to_string()));
                false
            }
            Err(SelectionError::UnknownPlayer(id)) => {
                tracing::debug!("Ignoring toggle of unknown player {}", id);
                false
            }
        }
    }

    pub async fn create_team<A: FantasyApi>(&mut self, api: &A) -> Option<Team> {
        match self.selector.submit(api).await {
            Ok(team) => {
                self.notices.push(Notice::info("Team created successfully!"));
                Some(team)
            }
            Err(e @ SubmitError::Invalid(_)) | Err(e @ SubmitError::InFlight) => {
                self.notices.push(Notice::warning(e.to_string()));
                None
            }
            Err(e @ SubmitError::SubmissionFailed(_)) => {
                self.notices.push(Notice::error(e.to_string()));
                None
            }
        }
    }

    /// Drain the notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec!["Create Team".to_string()];
        if self.loading {
            lines.push("Loading data...".to_string());
            return lines;
        }

        lines.push(format!("Team Name: {}", self.selector.team_name()));
        lines.push("Remaining to select:".to_string());
        for (role, _) in ROLE_QUOTA {
            lines.push(format!("  {}: {} remaining", role, self.selector.remaining(role)));
        }

        for player in self.selector.players() {
            let marker = if self.selector.is_selected(&player.id) {
                "[x]"
            } else if self.selector.can_toggle(&player.id) {
                "[ ]"
            } else {
                "[-]"
            };
            lines.push(format!(
                "{} {} - Score: {} - {} ({})",
                marker, player.name, player.score, player.role, player.id
            ));
        }
        lines
    }
}
