use async_trait::async_trait;

use crate::core::models::{SearchError, SearchResult};

#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
