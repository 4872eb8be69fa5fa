mod client;

pub use client::ProjectClient;
