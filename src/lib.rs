pub mod analysis;
pub mod config;
pub mod controller;
pub mod error;
pub mod provider;
pub mod schema;
pub mod server;
pub mod types;
pub mod upload;
