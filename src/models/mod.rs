pub mod common;
pub mod game_match;
pub mod player;
pub mod team;

pub use game_match::{Match, NewMatch};
pub use player::{NewPlayer, Player, Role};
pub use team::{NewTeam, RosterSubmission, Team};
