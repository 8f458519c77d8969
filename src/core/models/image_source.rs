use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::models::service_url;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Remote(String),
    LocalFile(PathBuf),
}

impl ImageSource {
    /// Full URLs are fetched as-is, absolute paths that exist on this machine
    /// are read from disk, everything else is served by the search service.
    pub fn resolve(image_location: &str, service_base_url: &str) -> Self {
        let location = image_location.trim();

        if location.starts_with("http://") || location.starts_with("https://") {
            return ImageSource::Remote(location.to_string());
        }

        let path = Path::new(location);
        if path.is_absolute() && path.exists() {
            return ImageSource::LocalFile(path.to_path_buf());
        }

        ImageSource::Remote(service_url::asset_url(service_base_url, location))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Remote(url) => write!(f, "{}", url),
            ImageSource::LocalFile(path) => write!(f, "{}", path.display()),
        }
    }
}
