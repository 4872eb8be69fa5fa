pub mod settings;

pub use settings::{AppConfig, TEAMS_ROUTE};
