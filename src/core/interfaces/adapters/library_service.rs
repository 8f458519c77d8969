use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LibraryService: Send + Sync {
    async fn check_health(&self) -> Result<String>;
    async fn label_images(&self, directory: &str) -> Result<String>;
    async fn embed_descriptions(&self) -> Result<String>;
    async fn reset_library(&self, confirmation: &str) -> Result<String>;
}
