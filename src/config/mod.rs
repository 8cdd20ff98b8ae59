pub mod api;
pub mod settings;

pub use api::ApiSettings;
pub use settings::{get_config, Settings};
