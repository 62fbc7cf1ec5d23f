//! Repository fetching and commit-history aggregation.

pub mod aggregate;
pub mod fetcher;

pub use aggregate::{aggregate_commits, AuthorActivity};
pub use fetcher::{clone_repository, clone_url, CloneDir};

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Clone `url` into a fresh working directory under `clone_root`, walk the
/// full commit history once, and return per-author activity.
///
/// libgit2 is synchronous, so the clone and the walk run on a blocking
/// thread. The working directory is owned by a [`CloneDir`] guard inside
/// that task, so it is removed when the task finishes, on failure as well.
pub async fn run_analysis(clone_root: PathBuf, url: String) -> Result<Vec<AuthorActivity>> {
    tokio::task::spawn_blocking(move || -> Result<Vec<AuthorActivity>> {
        let workdir = CloneDir::create(&clone_root)?;
        let repo = clone_repository(&url, workdir.path())?;
        aggregate_commits(&repo)
    })
    .await
    .map_err(|e| Error::Other(anyhow::anyhow!("analysis task failed: {e}")))?
}
