//! Single-pass aggregation of commit history into per-author statistics.

use crate::errors::{Error, Result};
use chrono::{DateTime, NaiveDate};
use git2::Repository;
use std::collections::{HashMap, HashSet};

/// Per-author commit activity over a repository's full history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorActivity {
    pub author: String,
    /// Total commits authored
    pub commits: u64,
    /// Distinct calendar dates with at least one commit
    pub active_days: u64,
}

impl AuthorActivity {
    /// Average commits per active day.
    ///
    /// An author only appears with at least one commit on at least one day,
    /// so the divisor can never be zero.
    pub fn average_commits_per_day(&self) -> f64 {
        self.commits as f64 / self.active_days as f64
    }
}

/// Walk every commit reachable from HEAD and count, per author, the total
/// commits and the distinct calendar dates committed on.
///
/// Authors are returned in the order their first commit was encountered by
/// the walk; no explicit sort is imposed.
pub fn aggregate_commits(repo: &Repository) -> Result<Vec<AuthorActivity>> {
    let mut revwalk = repo.revwalk().map_err(walk_error)?;
    revwalk.push_head().map_err(walk_error)?;

    let mut order: Vec<String> = Vec::new();
    let mut commits: HashMap<String, u64> = HashMap::new();
    let mut days: HashMap<String, HashSet<NaiveDate>> = HashMap::new();

    for oid in revwalk {
        let oid = oid.map_err(walk_error)?;
        let commit = repo.find_commit(oid).map_err(walk_error)?;
        let author = commit.author().name().unwrap_or("Unknown").to_string();
        let date = committed_date(&commit);

        if !commits.contains_key(&author) {
            order.push(author.clone());
        }
        *commits.entry(author.clone()).or_insert(0) += 1;
        days.entry(author).or_default().insert(date);
    }

    Ok(order
        .into_iter()
        .map(|author| {
            let total = commits[&author];
            let active = days[&author].len() as u64;
            AuthorActivity {
                author,
                commits: total,
                active_days: active,
            }
        })
        .collect())
}

/// Calendar date of the commit in the timezone its metadata carries.
///
/// The committer timestamp is shifted by the recorded offset before
/// truncating to a date, so a late-evening commit in a positive-offset
/// timezone lands on the local day, not the UTC one.
fn committed_date(commit: &git2::Commit<'_>) -> NaiveDate {
    let time = commit.time();
    let local_secs = time.seconds() + i64::from(time.offset_minutes()) * 60;
    DateTime::from_timestamp(local_secs, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

fn walk_error(e: git2::Error) -> Error {
    Error::Other(anyhow::anyhow!("git history walk failed: {}", e.message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{add_commit, add_commit_with_offset, day_secs, init_fixture_repo};

    #[test]
    fn counts_commits_and_distinct_days_per_author() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = init_fixture_repo(dir.path());

        // Alice: three commits over two days; Bob: one commit
        add_commit(&repo, "Alice", day_secs(2021, 3, 1, 9));
        add_commit(&repo, "Alice", day_secs(2021, 3, 1, 17));
        add_commit(&repo, "Alice", day_secs(2021, 3, 2, 10));
        add_commit(&repo, "Bob", day_secs(2021, 3, 2, 11));

        let activity = aggregate_commits(&repo).expect("aggregate");
        assert_eq!(activity.len(), 2);

        let alice = activity.iter().find(|a| a.author == "Alice").expect("Alice present");
        assert_eq!(alice.commits, 3);
        assert_eq!(alice.active_days, 2);
        assert!((alice.average_commits_per_day() - 1.5).abs() < f64::EPSILON);

        let bob = activity.iter().find(|a| a.author == "Bob").expect("Bob present");
        assert_eq!(bob.commits, 1);
        assert_eq!(bob.active_days, 1);

        // Commits can never be outnumbered by active days
        for author in &activity {
            assert!(author.commits >= author.active_days);
        }
    }

    #[test]
    fn authors_keep_first_encountered_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = init_fixture_repo(dir.path());

        add_commit(&repo, "Alice", day_secs(2021, 3, 1, 9));
        add_commit(&repo, "Bob", day_secs(2021, 3, 2, 9));

        // The walk starts at HEAD, so Bob's commit is seen first
        let activity = aggregate_commits(&repo).expect("aggregate");
        assert_eq!(activity[0].author, "Bob");
        assert_eq!(activity[1].author, "Alice");
    }

    #[test]
    fn committed_date_respects_commit_offset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = init_fixture_repo(dir.path());

        // 23:30 UTC with a +120 minute offset is already the next local day;
        // one commit the next UTC morning lands on the same local date.
        add_commit_with_offset(&repo, "Alice", day_secs(2021, 1, 1, 23) + 30 * 60, 120);
        add_commit_with_offset(&repo, "Alice", day_secs(2021, 1, 2, 8), 120);

        let activity = aggregate_commits(&repo).expect("aggregate");
        assert_eq!(activity[0].commits, 2);
        assert_eq!(activity[0].active_days, 1);
    }

    #[test]
    fn unborn_head_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = init_fixture_repo(dir.path());

        // HEAD is unborn; the walk cannot start
        assert!(aggregate_commits(&repo).is_err());
    }
}
