use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::StreamExt;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::task;
use iced::window::{self, Id};
use iced::{Alignment, Color, Element, Length, Size, Task};

use crate::adapters::{ServiceBundle, ServiceConnector};
use crate::core::models::{
    LibraryOperation, RequestTicket, RequestTimeoutChoice, ResultCardStyle, ServiceStatus,
    ThemeMode, UserSettings,
};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{
    render_shell, LibraryAction, LibraryPanel, LibraryPanelMessage, SearchView, SearchViewAction,
    SearchViewMessage,
};

const IMAGE_LOAD_CONCURRENCY: usize = 4;

pub enum AppWindow {
    Main,
    Settings,
}

pub struct AppOrchestrator {
    services: ServiceBundle,
    connector: ServiceConnector,
    settings_path: PathBuf,
    windows: HashMap<Id, AppWindow>,
    main_window_id: Option<Id>,
    settings_window_id: Option<Id>,
    search_view: SearchView,
    library_panel: LibraryPanel,
    service_status: ServiceStatus,
    settings: UserSettings,
    temp_settings: Option<UserSettings>,
    settings_error: Option<String>,
    pending_image_loads: Option<(RequestTicket, task::Handle)>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    Search(SearchViewMessage),
    Library(LibraryPanelMessage),
    CheckServiceHealth,
    ServiceHealthChecked(Result<String, String>),
    ImageOpened(Result<(), String>),
    OpenSettings,
    UpdateServiceUrl(String),
    UpdateTheme(ThemeMode),
    UpdateCardStyle(ResultCardStyle),
    UpdateRequestTimeout(RequestTimeoutChoice),
    SaveSettings,
    CloseWindow(Id),
    WindowClosed(Id),
}

impl AppOrchestrator {
    pub fn build(
        services: ServiceBundle,
        connector: ServiceConnector,
        settings: UserSettings,
        settings_path: PathBuf,
    ) -> Self {
        Self {
            services,
            connector,
            settings_path,
            windows: HashMap::new(),
            main_window_id: None,
            settings_window_id: None,
            search_view: SearchView::build(settings.card_style),
            library_panel: LibraryPanel::build(),
            service_status: ServiceStatus::Checking,
            settings,
            temp_settings: None,
            settings_error: None,
            pending_image_loads: None,
        }
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn get_window_title(&self, window_id: Id) -> String {
        match self.windows.get(&window_id) {
            Some(AppWindow::Settings) => format!("{} - Settings", global_constants::APPLICATION_TITLE),
            _ => global_constants::APPLICATION_TITLE.to_string(),
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => {
                return self.handle_open_main_window();
            }
            OrchestratorMessage::Search(search_msg) => {
                let action = self.search_view.update(search_msg);
                return self.handle_search_action(action);
            }
            OrchestratorMessage::Library(library_msg) => {
                let action = self.library_panel.update(library_msg);
                return self.handle_library_action(action);
            }
            OrchestratorMessage::CheckServiceHealth => {
                return self.handle_check_service_health();
            }
            OrchestratorMessage::ServiceHealthChecked(outcome) => {
                self.service_status = match outcome {
                    Ok(message) => {
                        log::info!("[ORCHESTRATOR] Search service reachable: {}", message);
                        ServiceStatus::Online(message)
                    }
                    Err(error) => {
                        log::warn!("[ORCHESTRATOR] Search service unreachable: {}", error);
                        ServiceStatus::Offline(error)
                    }
                };
            }
            OrchestratorMessage::ImageOpened(outcome) => {
                if let Err(error) = outcome {
                    log::error!("[ORCHESTRATOR] Failed to open image: {}", error);
                }
            }
            OrchestratorMessage::OpenSettings => {
                return self.handle_open_settings();
            }
            OrchestratorMessage::UpdateServiceUrl(url) => {
                if let Some(ref mut temp) = self.temp_settings {
                    temp.service_base_url = url;
                }
            }
            OrchestratorMessage::UpdateTheme(theme) => {
                if let Some(ref mut temp) = self.temp_settings {
                    temp.theme_mode = theme;
                }
            }
            OrchestratorMessage::UpdateCardStyle(card_style) => {
                if let Some(ref mut temp) = self.temp_settings {
                    temp.card_style = card_style;
                }
            }
            OrchestratorMessage::UpdateRequestTimeout(choice) => {
                if let Some(ref mut temp) = self.temp_settings {
                    temp.request_timeout_seconds = choice.0;
                }
            }
            OrchestratorMessage::SaveSettings => {
                return self.handle_save_settings();
            }
            OrchestratorMessage::CloseWindow(id) => {
                log::info!("[ORCHESTRATOR] Closing window: {:?}", id);
                return window::close(id);
            }
            OrchestratorMessage::WindowClosed(id) => {
                return self.handle_window_closed(id);
            }
        }

        Task::none()
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        match self.windows.get(&window_id) {
            Some(AppWindow::Main) => self.render_main_window(),
            Some(AppWindow::Settings) => self.render_settings_window(),
            None => text("Loading...").into(),
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if let Some(id) = self.main_window_id {
            if self.windows.contains_key(&id) {
                log::warn!("[ORCHESTRATOR] Main window already exists and is open");
                return Task::none();
            }
        }

        let (width, height) = global_constants::MAIN_WINDOW_SIZE;
        let (id, task) = window::open(window::Settings {
            size: Size::new(width, height),
            min_size: Some(Size::new(420.0, 480.0)),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        self.windows.insert(id, AppWindow::Main);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);

        Task::batch(vec![
            task.discard(),
            Task::done(OrchestratorMessage::CheckServiceHealth),
        ])
    }

    fn handle_search_action(&mut self, action: SearchViewAction) -> Task<OrchestratorMessage> {
        match action {
            SearchViewAction::None => Task::none(),
            SearchViewAction::Search { ticket, query } => self.perform_search(ticket, query),
            SearchViewAction::LoadImages { ticket, images } => self.load_images(ticket, images),
            SearchViewAction::OpenImage(image_location) => self.open_image(image_location),
        }
    }

    fn perform_search(&self, ticket: RequestTicket, query: String) -> Task<OrchestratorMessage> {
        let search_service = Arc::clone(&self.services.search_service);

        Task::perform(
            async move { search_service.search(&query).await },
            move |outcome| {
                OrchestratorMessage::Search(SearchViewMessage::SearchCompleted(ticket, outcome))
            },
        )
    }

    fn load_images(
        &mut self,
        ticket: RequestTicket,
        images: Vec<(String, String)>,
    ) -> Task<OrchestratorMessage> {
        log::debug!(
            "[ORCHESTRATOR] Loading {} images for request #{}",
            images.len(),
            ticket.value()
        );

        if let Some((previous_ticket, handle)) = self.pending_image_loads.take() {
            log::debug!(
                "[ORCHESTRATOR] Cancelling image loads for request #{}",
                previous_ticket.value()
            );
            handle.abort();
        }

        let image_loader = Arc::clone(&self.services.image_loader);
        let loads = futures::stream::iter(images)
            .map(move |(identifier, image_location)| {
                let image_loader = Arc::clone(&image_loader);
                async move {
                    let source = image_loader.resolve_source(&image_location);
                    let outcome = image_loader
                        .load_image(&source)
                        .await
                        .map_err(|e| e.to_string());
                    (identifier, outcome)
                }
            })
            .buffer_unordered(IMAGE_LOAD_CONCURRENCY);

        let (task, handle) = Task::run(loads, move |(identifier, outcome)| {
            OrchestratorMessage::Search(SearchViewMessage::ImageLoaded(ticket, identifier, outcome))
        })
        .abortable();
        self.pending_image_loads = Some((ticket, handle));

        task
    }

    fn open_image(&self, image_location: String) -> Task<OrchestratorMessage> {
        let image_loader = Arc::clone(&self.services.image_loader);

        Task::perform(
            async move {
                let source = image_loader.resolve_source(&image_location);
                log::info!("[ORCHESTRATOR] Opening {}", source);
                open::that(source.to_string()).map_err(|e| e.to_string())
            },
            OrchestratorMessage::ImageOpened,
        )
    }

    fn handle_check_service_health(&mut self) -> Task<OrchestratorMessage> {
        self.service_status = ServiceStatus::Checking;
        let library_service = Arc::clone(&self.services.library_service);

        Task::perform(
            async move {
                library_service
                    .check_health()
                    .await
                    .map_err(|e| e.to_string())
            },
            OrchestratorMessage::ServiceHealthChecked,
        )
    }

    fn handle_library_action(&mut self, action: LibraryAction) -> Task<OrchestratorMessage> {
        let library_service = Arc::clone(&self.services.library_service);

        let (operation, future): (LibraryOperation, BoxFuture<'static, anyhow::Result<String>>) =
            match action {
                LibraryAction::None => return Task::none(),
                LibraryAction::LabelImages(directory) => (
                    LibraryOperation::LabelImages,
                    Box::pin(async move { library_service.label_images(&directory).await }),
                ),
                LibraryAction::EmbedDescriptions => (
                    LibraryOperation::EmbedDescriptions,
                    Box::pin(async move { library_service.embed_descriptions().await }),
                ),
                LibraryAction::Reset(confirmation) => (
                    LibraryOperation::Reset,
                    Box::pin(async move { library_service.reset_library(&confirmation).await }),
                ),
            };

        Task::perform(
            async move { future.await.map_err(|e| e.to_string()) },
            move |outcome| {
                OrchestratorMessage::Library(LibraryPanelMessage::Finished(operation, outcome))
            },
        )
    }

    fn handle_open_settings(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Opening settings window");
        if self.settings_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Settings window already open");
            return Task::none();
        }

        let (width, height) = global_constants::SETTINGS_WINDOW_SIZE;
        let (id, task) = window::open(window::Settings {
            size: Size::new(width, height),
            position: window::Position::Centered,
            resizable: false,
            ..Default::default()
        });

        self.settings_window_id = Some(id);
        self.temp_settings = Some(self.settings.clone());
        self.settings_error = None;
        self.windows.insert(id, AppWindow::Settings);
        log::info!("[ORCHESTRATOR] Settings window created with ID: {:?}", id);

        task.discard()
    }

    fn handle_save_settings(&mut self) -> Task<OrchestratorMessage> {
        let Some(temp) = self.temp_settings.clone() else {
            return Task::none();
        };

        let needs_reconnect = temp.service_base_url != self.settings.service_base_url
            || temp.request_timeout_seconds != self.settings.request_timeout_seconds;

        if needs_reconnect {
            match (self.connector)(&temp) {
                Ok(services) => {
                    log::info!(
                        "[ORCHESTRATOR] Reconnected services to {}",
                        temp.service_base_url
                    );
                    self.services = services;
                }
                Err(e) => {
                    log::error!("[ORCHESTRATOR] Failed to apply service settings: {}", e);
                    self.settings_error = Some(format!("Failed to apply settings: {}", e));
                    return Task::none();
                }
            }
        }

        self.settings = temp;
        self.temp_settings = None;
        self.settings_error = None;
        self.search_view.set_card_style(self.settings.card_style);

        if let Err(e) = self.settings.save_to_path(&self.settings_path) {
            log::error!("[ORCHESTRATOR] Failed to save settings: {}", e);
        } else {
            log::info!("[ORCHESTRATOR] Settings saved successfully");
        }

        let mut tasks = Vec::new();
        if needs_reconnect {
            tasks.push(Task::done(OrchestratorMessage::CheckServiceHealth));
        }
        if let Some(id) = self.settings_window_id {
            tasks.push(window::close(id));
        }
        Task::batch(tasks)
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);
        self.windows.remove(&id);

        if Some(id) == self.main_window_id {
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            self.main_window_id = None;
            return iced::exit();
        }

        if Some(id) == self.settings_window_id {
            self.settings_window_id = None;
            self.temp_settings = None;
            self.settings_error = None;
        }

        Task::none()
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let settings_btn = button(text("Settings").size(14))
            .padding([8, 18])
            .style(app_theme::secondary_button_style)
            .on_press(OrchestratorMessage::OpenSettings);

        let header_accessory = row![self.render_status_indicator(), settings_btn]
            .spacing(16)
            .align_y(Alignment::Center)
            .into();

        let body = self.search_view.render_ui().map(OrchestratorMessage::Search);

        render_shell(header_accessory, body)
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let status_color = match self.service_status {
            ServiceStatus::Online(_) => app_theme::ONLINE_COLOR,
            ServiceStatus::Checking => app_theme::CHECKING_COLOR,
            ServiceStatus::Offline(_) => app_theme::ERROR_TEXT_COLOR,
        };

        let indicator = row![
            text("●")
                .size(12)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(status_color),
                }),
            text(self.service_status.label()).size(13),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        button(indicator)
            .padding([4, 8])
            .style(|_theme, _status| button::Style {
                text_color: Color::from_rgb(0.85, 0.85, 0.85),
                ..Default::default()
            })
            .on_press(OrchestratorMessage::CheckServiceHealth)
            .into()
    }

    fn render_settings_window(&self) -> Element<'_, OrchestratorMessage> {
        let temp = self.temp_settings.as_ref().unwrap_or(&self.settings);

        let title = text("Settings").size(28);

        let service_section = self.render_settings_section(
            "Search service",
            column![
                self.render_setting_row(
                    "Service URL",
                    "Base address of the search backend",
                    text_input(global_constants::DEFAULT_SERVICE_BASE_URL, &temp.service_base_url)
                        .on_input(OrchestratorMessage::UpdateServiceUrl)
                        .padding(12)
                        .into(),
                ),
                self.render_setting_row(
                    "Request timeout",
                    "How long a search may take",
                    pick_list(
                        RequestTimeoutChoice::all(),
                        Some(RequestTimeoutChoice(temp.request_timeout_seconds)),
                        OrchestratorMessage::UpdateRequestTimeout,
                    )
                    .padding(12)
                    .into(),
                ),
            ]
            .spacing(12),
        );

        let appearance_section = self.render_settings_section(
            "Appearance",
            column![
                self.render_setting_row(
                    "Theme",
                    "Choose light or dark mode",
                    pick_list(
                        vec![ThemeMode::Dark, ThemeMode::Light],
                        Some(temp.theme_mode.clone()),
                        OrchestratorMessage::UpdateTheme,
                    )
                    .padding(12)
                    .into(),
                ),
                self.render_setting_row(
                    "Result cards",
                    "Framed cards show a placeholder for missing images",
                    pick_list(
                        vec![ResultCardStyle::Framed, ResultCardStyle::Minimal],
                        Some(temp.card_style),
                        OrchestratorMessage::UpdateCardStyle,
                    )
                    .padding(12)
                    .into(),
                ),
            ]
            .spacing(12),
        );

        let library_section = self.render_settings_section(
            "Image library",
            column![self
                .library_panel
                .render_ui()
                .map(OrchestratorMessage::Library)],
        );

        let save_btn = button(text("Save Changes").size(15))
            .padding([14, 36])
            .style(app_theme::primary_button_style)
            .on_press(OrchestratorMessage::SaveSettings);

        let mut content = column![
            title,
            Space::new().height(Length::Fixed(16.0)),
            service_section,
            appearance_section,
            library_section,
            Space::new().height(Length::Fixed(12.0)),
        ]
        .spacing(16)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        if let Some(error) = &self.settings_error {
            content = content.push(text(error).size(13).style(app_theme::error_text));
        }
        content = content.push(save_btn);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::page_style)
            .into()
    }

    fn render_settings_section<'a>(
        &self,
        title: &'a str,
        content: iced::widget::Column<'a, OrchestratorMessage>,
    ) -> Element<'a, OrchestratorMessage> {
        let section_content = container(content)
            .padding([12, 16])
            .width(Length::Fill)
            .style(app_theme::section_style);

        column![text(title).size(16), section_content]
            .spacing(8)
            .width(Length::Fill)
            .into()
    }

    fn render_setting_row<'a>(
        &self,
        label: &'a str,
        description: &'a str,
        input: Element<'a, OrchestratorMessage>,
    ) -> Element<'a, OrchestratorMessage> {
        let label_col = column![
            text(label).size(14),
            text(description).size(11).style(app_theme::muted_text),
        ]
        .spacing(2)
        .width(Length::FillPortion(2));

        let input_col = container(input).width(Length::FillPortion(3));

        row![label_col, input_col]
            .spacing(16)
            .align_y(Alignment::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::core::interfaces::adapters::{ImageLoader, LibraryService, SearchService};
    use crate::core::models::{ImageSource, ResultImage, SearchError, SearchResult};

    static CONNECT_CALLS: AtomicUsize = AtomicUsize::new(0);
    static RESOLVE_CALLS: AtomicUsize = AtomicUsize::new(0);

    struct MockSearchService;

    #[async_trait]
    impl SearchService for MockSearchService {
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
            Ok(vec![])
        }
    }

    struct MockImageLoader;

    #[async_trait]
    impl ImageLoader for MockImageLoader {
        fn resolve_source(&self, image_location: &str) -> ImageSource {
            RESOLVE_CALLS.fetch_add(1, Ordering::SeqCst);
            ImageSource::Remote(format!("http://mock{}", image_location))
        }

        async fn load_image(&self, _source: &ImageSource) -> anyhow::Result<ResultImage> {
            anyhow::bail!("no images in tests")
        }
    }

    struct MockLibraryService;

    #[async_trait]
    impl LibraryService for MockLibraryService {
        async fn check_health(&self) -> anyhow::Result<String> {
            Ok("Welcome".to_string())
        }

        async fn label_images(&self, directory: &str) -> anyhow::Result<String> {
            Ok(format!("Labeled {}", directory))
        }

        async fn embed_descriptions(&self) -> anyhow::Result<String> {
            Ok("Embedded".to_string())
        }

        async fn reset_library(&self, _confirmation: &str) -> anyhow::Result<String> {
            Ok("Reset".to_string())
        }
    }

    fn mock_services() -> ServiceBundle {
        ServiceBundle {
            search_service: Arc::new(MockSearchService),
            image_loader: Arc::new(MockImageLoader),
            library_service: Arc::new(MockLibraryService),
        }
    }

    fn mock_connector(settings: &UserSettings) -> anyhow::Result<ServiceBundle> {
        if settings.service_base_url.trim().is_empty() {
            anyhow::bail!("Search service URL is empty");
        }
        CONNECT_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(mock_services())
    }

    fn test_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("image-search-orchestrator-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    fn create_test_orchestrator(name: &str) -> AppOrchestrator {
        AppOrchestrator::build(
            mock_services(),
            mock_connector,
            UserSettings::default(),
            test_settings_path(name),
        )
    }

    fn sample_result(identifier: &str) -> SearchResult {
        SearchResult {
            identifier: identifier.to_string(),
            image_location: format!("/img/{}.jpg", identifier),
            description: format!("result {}", identifier),
            distance: 0.1234,
        }
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator("initial");

        assert_eq!(orchestrator.windows.len(), 0);
        assert!(orchestrator.main_window_id.is_none());
        assert!(orchestrator.settings_window_id.is_none());
        assert!(orchestrator.temp_settings.is_none());
        assert_eq!(orchestrator.service_status, ServiceStatus::Checking);
        assert!(!orchestrator.search_view.is_loading());
    }

    #[test]
    fn test_search_submit_marks_view_loading() {
        let mut orchestrator = create_test_orchestrator("submit");

        let _ = orchestrator.update(OrchestratorMessage::Search(
            SearchViewMessage::QueryChanged("cat".to_string()),
        ));
        let _ = orchestrator.update(OrchestratorMessage::Search(SearchViewMessage::Submit));

        assert!(orchestrator.search_view.is_loading());
        assert!(orchestrator.search_view.error_message().is_none());
    }

    #[test]
    fn test_search_completion_flows_into_view() {
        let mut orchestrator = create_test_orchestrator("completion");
        let _ = orchestrator.update(OrchestratorMessage::Search(
            SearchViewMessage::QueryChanged("cat".to_string()),
        ));
        let _ = orchestrator.update(OrchestratorMessage::Search(SearchViewMessage::Submit));

        let _ = orchestrator.update(OrchestratorMessage::Search(
            SearchViewMessage::SearchCompleted(
                RequestTicket::default().next(),
                Ok(vec![sample_result("abc")]),
            ),
        ));

        assert!(!orchestrator.search_view.is_loading());
        assert_eq!(orchestrator.search_view.results().len(), 1);
        assert_eq!(orchestrator.search_view.results()[0].formatted_distance(), "0.12");
    }

    #[test]
    fn test_health_check_result_updates_status() {
        let mut orchestrator = create_test_orchestrator("health");

        let _ = orchestrator.update(OrchestratorMessage::ServiceHealthChecked(Ok(
            "Welcome".to_string()
        )));
        assert_eq!(
            orchestrator.service_status,
            ServiceStatus::Online("Welcome".to_string())
        );

        let _ = orchestrator.update(OrchestratorMessage::ServiceHealthChecked(Err(
            "connection refused".to_string(),
        )));
        assert_eq!(
            orchestrator.service_status,
            ServiceStatus::Offline("connection refused".to_string())
        );
    }

    #[test]
    fn test_check_service_health_resets_status_to_checking() {
        let mut orchestrator = create_test_orchestrator("recheck");
        orchestrator.service_status = ServiceStatus::Offline("down".to_string());

        let _ = orchestrator.update(OrchestratorMessage::CheckServiceHealth);

        assert_eq!(orchestrator.service_status, ServiceStatus::Checking);
    }

    #[test]
    fn test_update_service_url_modifies_temp_settings() {
        let mut orchestrator = create_test_orchestrator("url");
        orchestrator.temp_settings = Some(UserSettings::default());

        let new_url = "http://gpu-box:8000".to_string();
        let _ = orchestrator.update(OrchestratorMessage::UpdateServiceUrl(new_url.clone()));

        assert_eq!(orchestrator.temp_settings.unwrap().service_base_url, new_url);
    }

    #[test]
    fn test_update_theme_and_card_style_modify_temp_settings() {
        let mut orchestrator = create_test_orchestrator("appearance");
        orchestrator.temp_settings = Some(UserSettings::default());

        let _ = orchestrator.update(OrchestratorMessage::UpdateTheme(ThemeMode::Light));
        let _ = orchestrator.update(OrchestratorMessage::UpdateCardStyle(ResultCardStyle::Minimal));
        let _ = orchestrator.update(OrchestratorMessage::UpdateRequestTimeout(
            RequestTimeoutChoice(Some(30)),
        ));

        let temp = orchestrator.temp_settings.unwrap();
        assert_eq!(temp.theme_mode, ThemeMode::Light);
        assert_eq!(temp.card_style, ResultCardStyle::Minimal);
        assert_eq!(temp.request_timeout_seconds, Some(30));
    }

    #[test]
    fn test_updates_without_open_settings_are_ignored() {
        let mut orchestrator = create_test_orchestrator("ignored");

        let _ = orchestrator.update(OrchestratorMessage::UpdateTheme(ThemeMode::Light));

        assert!(orchestrator.temp_settings.is_none());
        assert_eq!(orchestrator.settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_save_settings_applies_card_style_and_persists() {
        let mut orchestrator = create_test_orchestrator("save");
        orchestrator.temp_settings = Some(UserSettings {
            card_style: ResultCardStyle::Minimal,
            ..UserSettings::default()
        });

        let _ = orchestrator.update(OrchestratorMessage::SaveSettings);

        assert!(orchestrator.temp_settings.is_none());
        assert_eq!(orchestrator.settings.card_style, ResultCardStyle::Minimal);
        assert_eq!(orchestrator.search_view.card_style(), ResultCardStyle::Minimal);

        let saved = UserSettings::load_from_path(&orchestrator.settings_path).unwrap();
        assert_eq!(saved.card_style, ResultCardStyle::Minimal);

        if let Some(parent) = orchestrator.settings_path.parent() {
            std::fs::remove_dir_all(parent).ok();
        }
    }

    #[test]
    fn test_save_settings_reconnects_when_service_url_changes() {
        let mut orchestrator = create_test_orchestrator("reconnect");
        orchestrator.temp_settings = Some(UserSettings {
            service_base_url: "http://elsewhere:8000".to_string(),
            ..UserSettings::default()
        });
        let calls_before = CONNECT_CALLS.load(Ordering::SeqCst);

        let _ = orchestrator.update(OrchestratorMessage::SaveSettings);

        assert!(CONNECT_CALLS.load(Ordering::SeqCst) > calls_before);
        assert_eq!(orchestrator.settings.service_base_url, "http://elsewhere:8000");

        if let Some(parent) = orchestrator.settings_path.parent() {
            std::fs::remove_dir_all(parent).ok();
        }
    }

    #[test]
    fn test_save_settings_keeps_old_settings_when_connect_fails() {
        let mut orchestrator = create_test_orchestrator("connect-fails");
        orchestrator.temp_settings = Some(UserSettings {
            service_base_url: "   ".to_string(),
            ..UserSettings::default()
        });

        let _ = orchestrator.update(OrchestratorMessage::SaveSettings);

        assert_eq!(orchestrator.settings.service_base_url, "http://localhost:8000");
        assert!(orchestrator.temp_settings.is_some());
        assert!(orchestrator
            .settings_error
            .as_deref()
            .unwrap_or_default()
            .contains("Search service URL is empty"));
    }

    #[test]
    fn test_closing_settings_window_discards_temp_settings() {
        let mut orchestrator = create_test_orchestrator("close-settings");
        let settings_id = Id::unique();
        orchestrator.settings_window_id = Some(settings_id);
        orchestrator.windows.insert(settings_id, AppWindow::Settings);
        orchestrator.temp_settings = Some(UserSettings::default());

        let _ = orchestrator.update(OrchestratorMessage::WindowClosed(settings_id));

        assert!(orchestrator.settings_window_id.is_none());
        assert!(orchestrator.temp_settings.is_none());
        assert!(orchestrator.windows.is_empty());
    }

    #[test]
    fn test_library_run_marks_panel_busy() {
        let mut orchestrator = create_test_orchestrator("library");

        let _ = orchestrator.update(OrchestratorMessage::Library(LibraryPanelMessage::Run(
            LibraryOperation::EmbedDescriptions,
        )));

        assert_eq!(
            orchestrator.library_panel.running(),
            Some(LibraryOperation::EmbedDescriptions)
        );
    }

    #[test]
    fn test_get_window_title_returns_application_title() {
        let mut orchestrator = create_test_orchestrator("title");
        let main_id = Id::unique();
        let settings_id = Id::unique();
        orchestrator.windows.insert(main_id, AppWindow::Main);
        orchestrator.windows.insert(settings_id, AppWindow::Settings);

        assert_eq!(orchestrator.get_window_title(main_id), "AI-Powered Image Search");
        assert_eq!(
            orchestrator.get_window_title(settings_id),
            "AI-Powered Image Search - Settings"
        );
    }

    fn complete_search(
        orchestrator: &mut AppOrchestrator,
        ticket: RequestTicket,
        query: &str,
        identifiers: &[&str],
    ) {
        let _ = orchestrator.update(OrchestratorMessage::Search(
            SearchViewMessage::QueryChanged(query.to_string()),
        ));
        let _ = orchestrator.update(OrchestratorMessage::Search(SearchViewMessage::Submit));
        let _ = orchestrator.update(OrchestratorMessage::Search(
            SearchViewMessage::SearchCompleted(
                ticket,
                Ok(identifiers.iter().map(|id| sample_result(id)).collect()),
            ),
        ));
    }

    #[test]
    fn test_new_result_set_replaces_pending_image_loads() {
        let mut orchestrator = create_test_orchestrator("image-loads");

        let first = RequestTicket::default().next();
        let second = first.next();

        complete_search(&mut orchestrator, first, "cat", &["abc"]);
        let first_pending = orchestrator.pending_image_loads.as_ref().map(|(t, _)| *t);
        complete_search(&mut orchestrator, second, "dog", &["def"]);
        let second_pending = orchestrator.pending_image_loads.as_ref().map(|(t, _)| *t);

        assert_eq!(first_pending, Some(first));
        assert_eq!(second_pending, Some(second));
    }

    #[test]
    fn test_open_image_resolves_source_off_the_update_path() {
        let mut orchestrator = create_test_orchestrator("open-image");
        complete_search(&mut orchestrator, RequestTicket::default().next(), "cat", &["abc"]);
        let resolves_before = RESOLVE_CALLS.load(Ordering::SeqCst);

        let _ = orchestrator.update(OrchestratorMessage::Search(SearchViewMessage::OpenImage(
            "abc".to_string(),
        )));

        assert_eq!(RESOLVE_CALLS.load(Ordering::SeqCst), resolves_before);
    }
}
