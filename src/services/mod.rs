pub mod api_client;
pub mod store;

pub use api_client::{ApiError, FantasyApi, FantasyApiClient};
pub use store::{FantasyStore, StoreError};
