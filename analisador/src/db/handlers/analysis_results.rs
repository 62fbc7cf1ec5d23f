//! Database repository for git analysis results.

use crate::db::{
    errors::Result,
    models::analysis_results::{AnalysisResultCreateDBRequest, AnalysisResultDBResponse},
};
use sqlx::{Connection, SqliteConnection};
use tracing::instrument;

/// Append-only store of per-author analysis rows.
///
/// One row is written per author per analysis run; historical rows
/// accumulate and are never updated or deleted by the service.
pub struct AnalysisResults<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> AnalysisResults<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Write all rows from one analysis run in a single transaction.
    #[instrument(skip(self, requests), fields(rows = requests.len()), err)]
    pub async fn create_batch(&mut self, requests: &[AnalysisResultCreateDBRequest]) -> Result<()> {
        let mut tx = self.db.begin().await?;

        for request in requests {
            sqlx::query(
                "INSERT INTO git_analysis_results \
                 (author, analyse_date, average_commits, repository_url, repository_name) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(&request.author)
            .bind(request.analyse_date)
            .bind(request.average_commits)
            .bind(&request.repository_url)
            .bind(&request.repository_name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// All historical rows whose author name contains `fragment`,
    /// case-insensitively, oldest first.
    #[instrument(skip(self), err)]
    pub async fn find_by_author_fragment(&mut self, fragment: &str) -> Result<Vec<AnalysisResultDBResponse>> {
        let rows = sqlx::query_as::<_, AnalysisResultDBResponse>(
            "SELECT id, author, analyse_date, average_commits, repository_url, repository_name \
             FROM git_analysis_results \
             WHERE LOWER(author) LIKE '%' || LOWER(?1) || '%' \
             ORDER BY id",
        )
        .bind(fragment)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }
}
