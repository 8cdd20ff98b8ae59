use thiserror::Error as ThisError;

use crate::models::player::Role;
use crate::services::api_client::ApiError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("You can select only {limit} {role}(s).")]
    CapacityExceeded { role: Role, limit: usize },

    #[error("No player found with id {0}")]
    UnknownPlayer(String),
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a {0}.")]
    MissingRole(Role),

    #[error("Please select a total of {expected} players. You currently have {actual} players selected.")]
    WrongCount { expected: usize, actual: usize },
}

#[derive(ThisError, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A team submission is already in progress")]
    InFlight,

    #[error("Failed to create team: {0}")]
    SubmissionFailed(#[from] ApiError),
}
