pub mod matches;
pub mod notice;
pub mod team_creation;

pub use matches::{DraftError, DraftField, MatchDraft, MatchesView};
pub use notice::{Notice, NoticeLevel};
pub use team_creation::TeamCreationView;
