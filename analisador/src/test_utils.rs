//! Shared test helpers: local fixture repositories and a test server.

use crate::{build_router, AppState, Config};
use git2::{Commit, Oid, Repository, Signature, Time};
use sqlx::SqlitePool;
use std::path::Path;

/// Build a test server over a router whose `git_host` points at a local
/// directory of fixture repositories.
pub fn test_server(pool: SqlitePool, git_host_dir: &Path, clone_root: &Path) -> axum_test::TestServer {
    let config = Config {
        git_host: git_host_dir.to_str().expect("utf8 host path").to_string(),
        clone_root: clone_root.to_path_buf(),
        ..Config::default()
    };
    let state = AppState { db: pool, config };
    axum_test::TestServer::new(build_router(state)).expect("Failed to create test server")
}

pub fn init_fixture_repo(path: &Path) -> Repository {
    Repository::init(path).expect("init fixture repository")
}

/// Commit onto HEAD with the given author name and committer timestamp
/// (seconds since epoch, zero offset).
pub fn add_commit(repo: &Repository, author: &str, when_secs: i64) -> Oid {
    add_commit_with_offset(repo, author, when_secs, 0)
}

/// Like [`add_commit`], with an explicit timezone offset in minutes.
pub fn add_commit_with_offset(repo: &Repository, author: &str, when_secs: i64, offset_minutes: i32) -> Oid {
    let email = format!("{}@example.com", author.to_lowercase().replace(' ', "."));
    let time = Time::new(when_secs, offset_minutes);
    let signature = Signature::new(author, &email, &time).expect("signature");

    let tree_id = {
        let mut index = repo.index().expect("repository index");
        index.write_tree().expect("write tree")
    };
    let tree = repo.find_tree(tree_id).expect("find tree");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, "fixture commit", &tree, &parents)
        .expect("create commit")
}

/// Epoch seconds for a UTC wall-clock hour on a given day.
pub fn day_secs(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time")
        .and_utc()
        .timestamp()
}
