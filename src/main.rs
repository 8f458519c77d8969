#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use iced::daemon;

use crate::adapters::ServiceBundle;
use crate::core::models::UserSettings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    let settings_path = UserSettings::settings_file_path().unwrap_or_else(|e| {
        log::warn!("[MAIN] {}, keeping settings in the temp directory", e);
        std::env::temp_dir()
            .join(global_constants::APPLICATION_DIRECTORY_NAME)
            .join(global_constants::SETTINGS_FILE_NAME)
    });

    let mut settings = UserSettings::load(&settings_path);

    let services = match ServiceBundle::connect(&settings) {
        Ok(services) => services,
        Err(e) => {
            log::error!(
                "[MAIN] Failed to connect to {:?}: {}, falling back to {}",
                settings.service_base_url,
                e,
                global_constants::DEFAULT_SERVICE_BASE_URL
            );
            settings.service_base_url = global_constants::DEFAULT_SERVICE_BASE_URL.to_string();
            ServiceBundle::connect(&settings)?
        }
    };

    daemon(
        move || app::SearchApp::build(settings.clone(), settings_path.clone(), services.clone()),
        app::SearchApp::handle_update,
        app::SearchApp::render_view,
    )
    .title(app::SearchApp::window_title)
    .theme(app::SearchApp::theme)
    .subscription(app::SearchApp::handle_subscription)
    .run()
    .map_err(|e| anyhow::anyhow!("Application exited with error: {}", e))
}
