pub mod listing;
pub mod server;
pub mod teams_page;

pub use listing::ListingService;
pub use server::ServerService;
pub use teams_page::TeamsPageLoader;
