use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

/// How each result card is drawn. `Framed` also swaps in a placeholder
/// when the card's image cannot be loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResultCardStyle {
    Minimal,
    Framed,
}

impl ResultCardStyle {
    pub fn shows_image_placeholder(&self) -> bool {
        matches!(self, ResultCardStyle::Framed)
    }
}

impl fmt::Display for ResultCardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCardStyle::Minimal => write!(f, "Minimal"),
            ResultCardStyle::Framed => write!(f, "Framed"),
        }
    }
}

impl Default for ResultCardStyle {
    fn default() -> Self {
        ResultCardStyle::Framed
    }
}

/// Pick-list entry for the request timeout; `None` waits indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeoutChoice(pub Option<u64>);

impl RequestTimeoutChoice {
    pub fn all() -> Vec<Self> {
        global_constants::REQUEST_TIMEOUT_CHOICES
            .iter()
            .map(|seconds| RequestTimeoutChoice(*seconds))
            .collect()
    }
}

impl fmt::Display for RequestTimeoutChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "Wait indefinitely"),
            Some(seconds) => write!(f, "{} seconds", seconds),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    pub service_base_url: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub card_style: ResultCardStyle,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            service_base_url: global_constants::DEFAULT_SERVICE_BASE_URL.to_string(),
            theme_mode: ThemeMode::default(),
            card_style: ResultCardStyle::default(),
            request_timeout_seconds: None,
        }
    }
}

impl UserSettings {
    /// Loads the settings file, then applies the environment override.
    pub fn load(settings_path: &Path) -> Self {
        Self::load_with_override(
            settings_path,
            std::env::var(global_constants::SERVICE_URL_ENV_VAR).ok(),
        )
    }

    /// The override applies even when the file is unreadable and the
    /// defaults are used instead.
    pub fn load_with_override(settings_path: &Path, override_url: Option<String>) -> Self {
        let mut settings = Self::load_from_path(settings_path).unwrap_or_else(|e| {
            log::warn!("[SETTINGS] Failed to load settings: {}, using defaults", e);
            Self::default()
        });
        settings.apply_service_url_override(override_url);
        settings
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Service URL: {}", settings.service_base_url);
        log::debug!(
            "[SETTINGS] Request timeout: {:?}",
            settings.request_timeout_seconds
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// Applied on load only. The file keeps its own value until the user
    /// saves settings from the window.
    pub fn apply_service_url_override(&mut self, override_url: Option<String>) {
        if let Some(url) = override_url {
            let url = url.trim();
            if !url.is_empty() {
                log::info!(
                    "[SETTINGS] {} set, using service URL {}",
                    global_constants::SERVICE_URL_ENV_VAR,
                    url
                );
                self.service_base_url = url.to_string();
            }
        }
    }

    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(std::time::Duration::from_secs)
    }

    pub fn settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
