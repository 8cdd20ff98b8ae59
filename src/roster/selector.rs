use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::player::{Player, Role};
use crate::models::team::{RosterSubmission, Team};
use crate::roster::errors::{SelectionError, SubmitError, ValidationError};
use crate::roster::quota::{full_capacity, quota_for, ROSTER_SIZE};
use crate::services::api_client::{ApiError, FantasyApi};

// Shared by every selector so a ticket can only match the one that issued it
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Outcome of a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

/// Proof that a create-team request was started. Handed back to
/// [`RosterSelector::finish_submit`] once the collaborator has answered.
#[derive(Debug)]
pub struct SubmissionTicket {
    id: u64,
    submission: RosterSubmission,
}

impl SubmissionTicket {
    pub fn submission(&self) -> &RosterSubmission {
        &self.submission
    }
}

/// Selection state of the team creation view.
///
/// Holds the candidate pool, the players picked so far (in the order they
/// were picked) and how many more players each role can take. The number of
/// selected players of a role never exceeds its quota.
#[derive(Debug, Clone)]
pub struct RosterSelector {
    pool: Vec<Player>,
    selected: Vec<Player>,
    remaining: BTreeMap<Role, usize>,
    team_name: String,
    in_flight: Option<u64>,
}

impl Default for RosterSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSelector {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
            selected: Vec::new(),
            remaining: full_capacity(),
            team_name: String::new(),
            in_flight: None,
        }
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        let mut selector = Self::new();
        selector.set_players(players);
        selector
    }

    /// Replace the candidate pool. Selected players missing from the new
    /// pool are dropped. Kept selections take the new pool's copy, and a
    /// player whose new role is already full is dropped too.
    pub fn set_players(&mut self, players: Vec<Player>) {
        self.pool = players;
        self.remaining = full_capacity();

        let previous = std::mem::take(&mut self.selected);
        for picked in previous {
            let Some(fresh) = self.pool.iter().find(|p| p.id == picked.id) else {
                tracing::debug!("Dropping {} from selection, no longer in pool", picked.id);
                continue;
            };
            match self.remaining.get_mut(&fresh.role) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    self.selected.push(fresh.clone());
                }
                _ => {
                    tracing::warn!(
                        "Dropping {} from selection, {} quota already full",
                        fresh.id,
                        fresh.role
                    );
                }
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.pool
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.pool.iter().find(|p| p.id == player_id)
    }

    pub fn selected(&self) -> &[Player] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().map(|p| p.id.clone()).collect()
    }

    pub fn is_selected(&self, player_id: &str) -> bool {
        self.selected.iter().any(|p| p.id == player_id)
    }

    pub fn selected_count(&self, role: Role) -> usize {
        self.selected.iter().filter(|p| p.role == role).count()
    }

    pub fn remaining(&self, role: Role) -> usize {
        self.remaining.get(&role).copied().unwrap_or(0)
    }

    pub fn remaining_by_role(&self) -> &BTreeMap<Role, usize> {
        &self.remaining
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
    }

    /// Select the player if unselected, deselect it otherwise.
    #[tracing::instrument(name = "Toggle player", skip(self))]
    pub fn toggle(&mut self, player_id: &str) -> Result<Toggle, SelectionError> {
        let player = self
            .player(player_id)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownPlayer(player_id.to_string()))?;

        if let Some(index) = self.selected.iter().position(|p| p.id == player.id) {
            let removed = self.selected.remove(index);
            *self.remaining.entry(removed.role).or_insert(0) += 1;
            tracing::debug!("Deselected {} ({})", removed.name, removed.role);
            return Ok(Toggle::Deselected);
        }

        let left = self.remaining(player.role);
        if left == 0 {
            let limit = quota_for(player.role);
            tracing::warn!("Quota for {} reached ({})", player.role, limit);
            return Err(SelectionError::CapacityExceeded {
                role: player.role,
                limit,
            });
        }

        self.remaining.insert(player.role, left - 1);
        tracing::debug!("Selected {} ({}), {} left", player.name, player.role, left - 1);
        self.selected.push(player);
        Ok(Toggle::Selected)
    }

    /// Whether [`toggle`](Self::toggle) would succeed for this player.
    pub fn can_toggle(&self, player_id: &str) -> bool {
        match self.player(player_id) {
            Some(player) => self.is_selected(player_id) || self.remaining(player.role) > 0,
            None => false,
        }
    }

    /// Check the roster is complete and build the create-team payload.
    pub fn validate(&self) -> Result<RosterSubmission, ValidationError> {
        for role in Role::ALL {
            if self.selected_count(role) == 0 {
                return Err(ValidationError::MissingRole(role));
            }
        }

        if self.selected.len() != ROSTER_SIZE {
            return Err(ValidationError::WrongCount {
                expected: ROSTER_SIZE,
                actual: self.selected.len(),
            });
        }

        Ok(RosterSubmission {
            name: self.team_name.clone(),
            players: self.selected_ids(),
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate and mark a create-team request as in flight.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.in_flight.is_some() {
            tracing::warn!("Rejected team submission while another one is pending");
            return Err(SubmitError::InFlight);
        }

        let submission = self.validate()?;
        let id = NEXT_TICKET.fetch_add(1, Ordering::Relaxed);
        self.in_flight = Some(id);

        Ok(SubmissionTicket { id, submission })
    }

    /// Record the collaborator's answer for a ticket from
    /// [`begin_submit`](Self::begin_submit). Success resets the selection;
    /// failure leaves it untouched.
    pub fn finish_submit(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<Team, ApiError>,
    ) -> Result<Team, SubmitError> {
        let current = self.in_flight == Some(ticket.id);
        if current {
            self.in_flight = None;
        } else {
            tracing::warn!("Ignoring answer for stale submission ticket {}", ticket.id);
        }

        match outcome {
            Ok(team) => {
                if current {
                    tracing::info!("Team '{}' created with id {}", team.name, team.id);
                    self.reset();
                }
                Ok(team)
            }
            Err(e) => {
                tracing::error!("Failed to create team '{}': {}", ticket.submission.name, e);
                Err(SubmitError::SubmissionFailed(e))
            }
        }
    }

    /// Validate, send the roster to the create-team endpoint and reset on success.
    #[tracing::instrument(
        name = "Submit roster",
        skip(self, api),
        fields(team_name = %self.team_name)
    )]
    pub async fn submit<A: FantasyApi>(&mut self, api: &A) -> Result<Team, SubmitError> {
        let ticket = self.begin_submit()?;
        let outcome = api.create_team(ticket.submission()).await;
        self.finish_submit(ticket, outcome)
    }

    /// Clear the selection and team name, restoring full capacity.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.remaining = full_capacity();
        self.team_name.clear();
    }
}
