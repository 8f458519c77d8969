use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::core::interfaces::adapters::LibraryService;
use crate::core::models::service_url;
use crate::core::models::{
    LabelImagesRequest, ResetLibraryRequest, ServiceErrorDetail, ServiceMessage,
};
use crate::global_constants;

pub struct HttpLibraryService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLibraryService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn post_json<T: Serialize + Sync>(&self, path: &str, payload: &T) -> Result<String> {
        let url = service_url::endpoint_url(&self.base_url, path);
        log::info!("[LIBRARY] POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        Self::read_message(response).await
    }

    async fn read_message(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        log::debug!("[LIBRARY] {} response: {}", status, body);

        if !status.is_success() {
            let detail = serde_json::from_str::<ServiceErrorDetail>(&body)
                .map(|error| error.detail)
                .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
            anyhow::bail!(detail);
        }

        let message: ServiceMessage = serde_json::from_str(&body)?;
        Ok(message.message)
    }
}

pub fn is_reset_confirmed(confirmation: &str) -> bool {
    confirmation.to_uppercase() == global_constants::RESET_CONFIRMATION_WORD
}

#[async_trait]
impl LibraryService for HttpLibraryService {
    async fn check_health(&self) -> Result<String> {
        let url = service_url::endpoint_url(&self.base_url, global_constants::HEALTH_ENDPOINT_PATH);
        log::debug!("[LIBRARY] GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::read_message(response).await
    }

    async fn label_images(&self, directory: &str) -> Result<String> {
        let directory = directory.trim();
        if directory.is_empty() {
            anyhow::bail!("Enter the directory that holds the images to label");
        }

        let request = LabelImagesRequest {
            directory: directory.to_string(),
        };
        self.post_json(global_constants::LABEL_IMAGES_ENDPOINT_PATH, &request)
            .await
    }

    async fn embed_descriptions(&self) -> Result<String> {
        self.post_json(
            global_constants::EMBED_TEXT_ENDPOINT_PATH,
            &serde_json::json!({}),
        )
        .await
    }

    async fn reset_library(&self, confirmation: &str) -> Result<String> {
        if !is_reset_confirmed(confirmation) {
            log::warn!("[LIBRARY] Reset not confirmed, request not sent");
            anyhow::bail!(
                "Type {} to confirm the reset",
                global_constants::RESET_CONFIRMATION_WORD
            );
        }

        let request = ResetLibraryRequest {
            confirm: confirmation.to_string(),
        };
        self.post_json(global_constants::RESET_DB_ENDPOINT_PATH, &request)
            .await
    }
}
