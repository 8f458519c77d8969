use std::path::PathBuf;

use iced::window::{self, Id};
use iced::{Element, Task, Theme};

use crate::adapters::ServiceBundle;
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::presentation::app_theme;

pub struct SearchApp {
    orchestrator: AppOrchestrator,
}

impl SearchApp {
    pub fn build(
        settings: UserSettings,
        settings_path: PathBuf,
        services: ServiceBundle,
    ) -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");
        log::info!("[APP] Search service at {}", settings.service_base_url);

        let orchestrator =
            AppOrchestrator::build(services, ServiceBundle::connect, settings, settings_path);

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::OpenMainWindow),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn theme(&self, _window_id: Id) -> Theme {
        app_theme::get_theme(&self.orchestrator.settings().theme_mode)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        iced::event::listen_with(|event, _status, id| {
            if let iced::Event::Window(window::Event::Closed) = event {
                return Some(OrchestratorMessage::WindowClosed(id));
            }
            None
        })
    }
}
