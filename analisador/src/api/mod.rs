//! HTTP surface: request models and endpoint handlers.

pub mod handlers;
pub mod models;
