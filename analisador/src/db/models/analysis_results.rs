//! Database models for persisted analysis results.

use chrono::{DateTime, Utc};

/// Database request for recording one author's outcome from an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisResultCreateDBRequest {
    pub author: String,
    pub analyse_date: DateTime<Utc>,
    pub average_commits: f64,
    pub repository_url: String,
    pub repository_name: String,
}

/// Database response for a stored analysis result
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnalysisResultDBResponse {
    pub id: i64,
    pub author: String,
    pub analyse_date: DateTime<Utc>,
    pub average_commits: f64,
    pub repository_url: String,
    pub repository_name: String,
}
