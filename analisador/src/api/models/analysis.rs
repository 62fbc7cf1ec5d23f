//! Request models for the analysis endpoints.

use serde::Deserialize;

/// Query parameters for `GET /analisador-git`
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub usuario: Option<String>,
    pub repositorio: Option<String>,
}

/// Query parameters for `GET /analisador-git/buscar`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub autor1: Option<String>,
    pub autor2: Option<String>,
    pub autor3: Option<String>,
}

impl SearchQuery {
    /// Non-empty author fragments, in parameter order
    pub fn fragments(&self) -> Vec<&str> {
        [&self.autor1, &self.autor2, &self.autor3]
            .into_iter()
            .filter_map(|fragment| fragment.as_deref())
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }
}
