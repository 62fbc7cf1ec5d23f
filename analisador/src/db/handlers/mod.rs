//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection, provides strongly-typed
//! operations and returns domain models from [`crate::db::models`].
//! The store for analysis results is append-and-find only; there is
//! deliberately no update or delete surface.

pub mod analysis_results;

pub use analysis_results::AnalysisResults;
