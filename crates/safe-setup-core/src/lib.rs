pub mod config;
pub mod fixtures;
pub mod models;
pub mod persistence;
pub mod setup;
pub mod sqlite;
