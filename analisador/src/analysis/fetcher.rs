//! Clone-URL construction and working-directory lifecycle.

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Build the clone URL for a hosted repository.
///
/// Caller-supplied values are inserted verbatim, matching the wire behavior
/// of the endpoints that consume this.
pub fn clone_url(git_host: &str, username: &str, repository: &str) -> String {
    format!("{git_host}/{username}/{repository}.git")
}

/// A per-request working directory, removed when dropped.
///
/// The UUID suffix keeps concurrent requests for the same repository apart.
#[derive(Debug)]
pub struct CloneDir {
    path: PathBuf,
}

impl CloneDir {
    /// Allocate a unique working directory path under `root`.
    ///
    /// The directory itself is created by the clone. Should a directory
    /// already exist at the chosen path, it is removed first.
    pub fn create(root: &Path) -> Result<Self> {
        let path = root.join(format!("repo-{}", Uuid::new_v4()));
        if path.exists() {
            fs::remove_dir_all(&path).map_err(|e| {
                Error::Other(anyhow::anyhow!("failed to clear working directory {}: {e}", path.display()))
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CloneDir {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!("Failed to remove working directory {}: {e}", self.path.display());
        }
    }
}

/// Full clone of the remote repository at `url` into `path`.
pub fn clone_repository(url: &str, path: &Path) -> Result<git2::Repository> {
    debug!("Cloning {} into {}", url, path.display());
    git2::build::RepoBuilder::new()
        .clone(url, path)
        .map_err(|e| Error::CloneFailed {
            message: e.message().to_string(),
        })
}
