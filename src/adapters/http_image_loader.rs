use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageLoader;
use crate::core::models::{ImageSource, ResultImage};

pub struct HttpImageLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpImageLoader {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[IMAGE_LOADER] GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Image request for {} failed with status {}", url, status);
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn read_local(&self, path: &std::path::Path) -> Result<Vec<u8>> {
        log::debug!("[IMAGE_LOADER] Reading {:?}", path);

        tokio::fs::read(path)
            .await
            .with_context(|| format!("Unable to read image file {:?}", path))
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    fn resolve_source(&self, image_location: &str) -> ImageSource {
        ImageSource::resolve(image_location, &self.base_url)
    }

    async fn load_image(&self, source: &ImageSource) -> Result<ResultImage> {
        let encoded_bytes = match source {
            ImageSource::Remote(url) => self.fetch_remote(url).await?,
            ImageSource::LocalFile(path) => self.read_local(path).await?,
        };

        let image = tokio::task::spawn_blocking(move || ResultImage::decode(&encoded_bytes))
            .await
            .context("Image decoding task was cancelled")??;

        log::debug!(
            "[IMAGE_LOADER] Loaded {} ({}x{})",
            source,
            image.width,
            image.height
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::canned_http::{serve_once, CannedResponse};

    fn encode_png() -> Vec<u8> {
        let buffer = ::image::RgbaImage::from_pixel(8, 6, ::image::Rgba([200, 0, 0, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        ::image::DynamicImage::ImageRgba8(buffer)
            .write_to(&mut bytes, ::image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_resolve_source_uses_service_base_url() {
        let loader = HttpImageLoader::new(reqwest::Client::new(), "http://search:8000".to_string());

        assert_eq!(
            loader.resolve_source("images/cat.jpg"),
            ImageSource::Remote("http://search:8000/images/cat.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_remote_image_decodes_png() {
        let (base_url, server) =
            serve_once(CannedResponse::bytes(200, "image/png", encode_png())).await;
        let loader = HttpImageLoader::new(reqwest::Client::new(), base_url);

        let source = loader.resolve_source("img/1.png");
        let image = loader.load_image(&source).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /img/1.png HTTP/1.1"));
        assert_eq!((image.width, image.height), (8, 6));
    }

    #[tokio::test]
    async fn test_load_remote_image_fails_on_missing_file() {
        let (base_url, server) = serve_once(CannedResponse::json(404, "{}")).await;
        let loader = HttpImageLoader::new(reqwest::Client::new(), base_url);

        let source = loader.resolve_source("img/missing.png");
        let error = loader.load_image(&source).await.unwrap_err();
        server.await.unwrap();

        assert!(error.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_load_remote_image_fails_on_undecodable_body() {
        let (base_url, server) = serve_once(CannedResponse::bytes(
            200,
            "image/jpeg",
            b"<html>not an image</html>".to_vec(),
        ))
        .await;
        let loader = HttpImageLoader::new(reqwest::Client::new(), base_url);

        let source = loader.resolve_source("img/broken.jpg");
        let error = loader.load_image(&source).await.unwrap_err();
        server.await.unwrap();

        assert!(error.to_string().contains("Unable to decode image data"));
    }

    #[tokio::test]
    async fn test_load_local_image_reads_from_disk() {
        let temp_file = std::env::temp_dir().join(format!(
            "image-loader-test-{}.png",
            std::process::id()
        ));
        std::fs::write(&temp_file, encode_png()).unwrap();
        let loader = HttpImageLoader::new(reqwest::Client::new(), "http://unused".to_string());

        let source = loader.resolve_source(temp_file.to_str().unwrap());
        let image = loader.load_image(&source).await.unwrap();

        assert!(matches!(source, ImageSource::LocalFile(_)));
        assert_eq!((image.width, image.height), (8, 6));

        std::fs::remove_file(&temp_file).ok();
    }
}
