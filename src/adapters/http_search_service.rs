use std::time::Duration;

use async_trait::async_trait;

use crate::core::interfaces::adapters::SearchService;
use crate::core::models::service_url;
use crate::core::models::{SearchError, SearchRequest, SearchResponse, SearchResult};
use crate::global_constants;

pub struct HttpSearchService {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpSearchService {
    pub fn new(client: reqwest::Client, base_url: String, timeout: Option<Duration>) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    async fn execute_search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = service_url::endpoint_url(&self.base_url, global_constants::SEARCH_ENDPOINT_PATH);
        let request = SearchRequest::for_query(query);

        log::info!("[HTTP_SEARCH] POST {} (limit {})", url, request.limit);
        log::debug!("[HTTP_SEARCH] Query: {:?}", request.query);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("[HTTP_SEARCH] Search service answered {}", status);
            return Err(SearchError::failed_status());
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        log::debug!("[HTTP_SEARCH] Response body: {} bytes", body.len());

        SearchResponse::parse(&body)
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let outcome = match self.timeout {
            Some(timeout_duration) => {
                match tokio::time::timeout(timeout_duration, self.execute_search(query)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(SearchError::Transport(format!(
                        "Search timed out after {} seconds",
                        timeout_duration.as_secs()
                    ))),
                }
            }
            None => self.execute_search(query).await,
        };

        match &outcome {
            Ok(results) => log::info!("[HTTP_SEARCH] Received {} results", results.len()),
            Err(e) => log::error!("[HTTP_SEARCH] Search failed: {}", e),
        }

        outcome
    }
}
