use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImageSource, ResultImage};

#[async_trait]
pub trait ImageLoader: Send + Sync {
    fn resolve_source(&self, image_location: &str) -> ImageSource;

    async fn load_image(&self, source: &ImageSource) -> Result<ResultImage>;
}
