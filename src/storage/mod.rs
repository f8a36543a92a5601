//! Storage module for database and configuration.

pub mod config;
pub mod database;
pub mod schema;

pub use config::{AdminSettings, AppConfig, ModelSettings, Theme, UiSettings};
pub use database::{Database, DatabaseError};
