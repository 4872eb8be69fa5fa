pub mod client;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;

pub use client::ApiClient;
pub use gateway::{TeamsGateway, list_teams, page_queries};
pub use query::Query;
