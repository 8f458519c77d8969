use std::sync::Arc;

use anyhow::Result;

use crate::adapters::{HttpImageLoader, HttpLibraryService, HttpSearchService};
use crate::core::interfaces::adapters::{ImageLoader, LibraryService, SearchService};
use crate::core::models::UserSettings;

#[derive(Clone)]
pub struct ServiceBundle {
    pub search_service: Arc<dyn SearchService>,
    pub image_loader: Arc<dyn ImageLoader>,
    pub library_service: Arc<dyn LibraryService>,
}

pub type ServiceConnector = fn(&UserSettings) -> Result<ServiceBundle>;

impl ServiceBundle {
    /// Builds the HTTP adapters for the configured service. All three share
    /// one connection pool.
    pub fn connect(settings: &UserSettings) -> Result<Self> {
        let base_url = settings.service_base_url.trim().to_string();
        if base_url.is_empty() {
            anyhow::bail!("Search service URL is empty");
        }

        let client = reqwest::Client::builder().build()?;

        log::info!("[SERVICES] Connecting adapters to {}", base_url);

        Ok(Self {
            search_service: Arc::new(HttpSearchService::new(
                client.clone(),
                base_url.clone(),
                settings.request_timeout(),
            )),
            image_loader: Arc::new(HttpImageLoader::new(client.clone(), base_url.clone())),
            library_service: Arc::new(HttpLibraryService::new(client, base_url)),
        })
    }
}
