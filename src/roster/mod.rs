pub mod errors;
pub mod quota;
pub mod selector;

pub use errors::{SelectionError, SubmitError, ValidationError};
pub use quota::{quota_for, ROLE_QUOTA, ROSTER_SIZE};
pub use selector::{RosterSelector, SubmissionTicket, Toggle};
