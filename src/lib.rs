//! Serves the rows of a published appointments spreadsheet as JSON.

pub mod config;
pub mod error;
pub mod excel;
pub mod handlers;
pub mod models;
pub mod routes;
