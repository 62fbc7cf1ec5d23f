//! Handlers for the git analysis endpoints.

use crate::analysis::{self, clone_url};
use crate::api::models::analysis::{AnalyzeQuery, SearchQuery};
use crate::db::handlers::AnalysisResults;
use crate::db::models::analysis_results::AnalysisResultCreateDBRequest;
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;
use std::collections::HashMap;

const MISSING_PARAMS_MESSAGE: &str = "Parâmetros \"usuario\" e \"repositorio\" são obrigatórios";
const MISSING_AUTHOR_MESSAGE: &str = "Pelo menos um parâmetro de autor deve ser informado";
const NO_RESULTS_MESSAGE: &str = "Nenhum resultado encontrado para os autores informados.";

/// Clone the requested repository, aggregate its full commit history and
/// persist one result row per author.
///
/// Returns one line per author, in the order each author's first commit was
/// encountered. The per-request working directory is removed when the
/// analysis finishes, whether it succeeded or not.
#[tracing::instrument(skip_all)]
pub async fn analyze_repository(State(state): State<AppState>, Query(query): Query<AnalyzeQuery>) -> Result<Html<String>> {
    let (username, repository) = match (query.usuario.as_deref(), query.repositorio.as_deref()) {
        (Some(user), Some(repo)) if !user.is_empty() && !repo.is_empty() => (user, repo),
        _ => {
            return Err(Error::MissingParameters {
                message: MISSING_PARAMS_MESSAGE.to_string(),
            })
        }
    };

    let url = clone_url(&state.config.git_host, username, repository);
    let activity = analysis::run_analysis(state.config.clone_root.clone(), url.clone()).await?;

    let analysed_at = Utc::now();
    let mut response = String::new();
    let mut rows = Vec::with_capacity(activity.len());
    for author in &activity {
        let average = author.average_commits_per_day();
        response.push_str(&format!(
            "{} realizou {} commits com uma média de {:.2} commits por dia.<br>",
            author.author, author.commits, average
        ));
        rows.push(AnalysisResultCreateDBRequest {
            author: author.author.clone(),
            analyse_date: analysed_at,
            average_commits: average,
            repository_url: url.clone(),
            repository_name: repository.to_string(),
        });
    }

    // All rows of this run go in as one batch
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    AnalysisResults::new(&mut conn).create_batch(&rows).await?;

    Ok(Html(response))
}

/// Look up previously computed averages by (partial) author name.
///
/// Up to three fragments are accepted; matches are merged keyed by exact
/// author name, so overlapping fragments yield a single line per author.
#[tracing::instrument(skip_all)]
pub async fn search_averages(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Result<Html<String>> {
    let fragments = query.fragments();
    if fragments.is_empty() {
        return Err(Error::MissingParameters {
            message: MISSING_AUTHOR_MESSAGE.to_string(),
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = AnalysisResults::new(&mut conn);

    // Dedup by exact author name across overlapping fragment matches; a
    // later match overwrites the line but keeps the author's position.
    let mut order: Vec<String> = Vec::new();
    let mut lines: HashMap<String, String> = HashMap::new();
    for fragment in fragments {
        for row in repo.find_by_author_fragment(fragment).await? {
            if !lines.contains_key(&row.author) {
                order.push(row.author.clone());
            }
            let line = format!("{} possui uma média de {:.2} commits por dia.", row.author, row.average_commits);
            lines.insert(row.author, line);
        }
    }

    if order.is_empty() {
        return Ok(Html(NO_RESULTS_MESSAGE.to_string()));
    }

    let body = order.iter().map(|author| lines[author].as_str()).collect::<Vec<_>>().join("<br>");
    Ok(Html(body))
}
