pub mod models;
pub mod page;

pub use models::{Team, TeamList};
pub use page::TeamsPage;
