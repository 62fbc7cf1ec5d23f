//! Database layer: models, repositories, and error mapping.

pub mod errors;
pub mod handlers;
pub mod models;
