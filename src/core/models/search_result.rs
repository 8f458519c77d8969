use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::models::SearchError;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "md5")]
    pub identifier: String,
    #[serde(rename = "file_path")]
    pub image_location: String,
    pub description: String,
    pub distance: f64,
}

impl SearchResult {
    pub fn formatted_distance(&self) -> String {
        format_distance(self.distance)
    }
}

pub fn format_distance(distance: f64) -> String {
    format!("{:.2}", distance)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
}

impl SearchRequest {
    pub fn for_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            limit: global_constants::SEARCH_RESULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Parses a success body, rejecting anything that does not match the
    /// `{"results": [...]}` contract or repeats an identifier.
    pub fn parse(body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response: SearchResponse = serde_json::from_str(body)
            .map_err(|error| SearchError::MalformedResponse(error.to_string()))?;

        let mut seen = HashSet::with_capacity(response.results.len());
        for result in &response.results {
            if !seen.insert(result.identifier.as_str()) {
                return Err(SearchError::MalformedResponse(format!(
                    "duplicate result identifier '{}'",
                    result.identifier
                )));
            }
        }

        Ok(response.results)
    }
}
