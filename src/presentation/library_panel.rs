use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::adapters::is_reset_confirmed;
use crate::core::models::LibraryOperation;
use crate::global_constants;
use crate::presentation::app_theme;

/// Maintenance controls for the service's image library. One operation
/// runs at a time.
pub struct LibraryPanel {
    directory: String,
    reset_confirmation: String,
    running: Option<LibraryOperation>,
    last_outcome: Option<(LibraryOperation, Result<String, String>)>,
}

#[derive(Debug, Clone)]
pub enum LibraryPanelMessage {
    DirectoryChanged(String),
    ResetConfirmationChanged(String),
    Run(LibraryOperation),
    Finished(LibraryOperation, Result<String, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryAction {
    None,
    LabelImages(String),
    EmbedDescriptions,
    Reset(String),
}

impl LibraryPanel {
    pub fn build() -> Self {
        Self {
            directory: String::new(),
            reset_confirmation: String::new(),
            running: None,
            last_outcome: None,
        }
    }

    pub fn running(&self) -> Option<LibraryOperation> {
        self.running
    }

    pub fn last_outcome(&self) -> Option<&(LibraryOperation, Result<String, String>)> {
        self.last_outcome.as_ref()
    }

    pub fn update(&mut self, message: LibraryPanelMessage) -> LibraryAction {
        match message {
            LibraryPanelMessage::DirectoryChanged(directory) => {
                self.directory = directory;
                LibraryAction::None
            }
            LibraryPanelMessage::ResetConfirmationChanged(confirmation) => {
                self.reset_confirmation = confirmation;
                LibraryAction::None
            }
            LibraryPanelMessage::Run(operation) => self.handle_run(operation),
            LibraryPanelMessage::Finished(operation, outcome) => {
                match &outcome {
                    Ok(message) => log::info!("[LIBRARY] {} finished: {}", operation, message),
                    Err(error) => log::error!("[LIBRARY] {} failed: {}", operation, error),
                }

                if operation == LibraryOperation::Reset && outcome.is_ok() {
                    self.reset_confirmation.clear();
                }
                self.running = None;
                self.last_outcome = Some((operation, outcome));
                LibraryAction::None
            }
        }
    }

    fn handle_run(&mut self, operation: LibraryOperation) -> LibraryAction {
        if let Some(current) = self.running {
            log::warn!("[LIBRARY] {} requested while {} is running", operation, current);
            return LibraryAction::None;
        }

        let action = match operation {
            LibraryOperation::LabelImages => {
                if self.directory.trim().is_empty() {
                    self.last_outcome = Some((
                        operation,
                        Err("Enter the directory that holds the images to label".to_string()),
                    ));
                    return LibraryAction::None;
                }
                LibraryAction::LabelImages(self.directory.trim().to_string())
            }
            LibraryOperation::EmbedDescriptions => LibraryAction::EmbedDescriptions,
            LibraryOperation::Reset => {
                if !is_reset_confirmed(&self.reset_confirmation) {
                    self.last_outcome = Some((
                        operation,
                        Err(format!(
                            "Type {} to confirm the reset",
                            global_constants::RESET_CONFIRMATION_WORD
                        )),
                    ));
                    return LibraryAction::None;
                }
                LibraryAction::Reset(self.reset_confirmation.clone())
            }
        };

        log::info!("[LIBRARY] Starting {}", operation);
        self.running = Some(operation);
        self.last_outcome = None;
        action
    }

    pub fn render_ui(&self) -> Element<'_, LibraryPanelMessage> {
        let idle = self.running.is_none();

        let label_row = row![
            text_input("/path/to/images", &self.directory)
                .on_input(LibraryPanelMessage::DirectoryChanged)
                .padding(10)
                .width(Length::Fill),
            button(text("Label").size(14))
                .padding([10, 18])
                .style(app_theme::secondary_button_style)
                .on_press_maybe(
                    idle.then_some(LibraryPanelMessage::Run(LibraryOperation::LabelImages))
                ),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let embed_row = row![
            text("Embed descriptions that are not indexed yet")
                .size(13)
                .width(Length::Fill),
            button(text("Embed").size(14))
                .padding([10, 18])
                .style(app_theme::secondary_button_style)
                .on_press_maybe(
                    idle.then_some(LibraryPanelMessage::Run(LibraryOperation::EmbedDescriptions))
                ),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let reset_row = row![
            text_input("Type YES to confirm", &self.reset_confirmation)
                .on_input(LibraryPanelMessage::ResetConfirmationChanged)
                .padding(10)
                .width(Length::Fill),
            button(text("Reset").size(14))
                .padding([10, 18])
                .style(app_theme::danger_button_style)
                .on_press_maybe(
                    (idle && is_reset_confirmed(&self.reset_confirmation))
                        .then_some(LibraryPanelMessage::Run(LibraryOperation::Reset))
                ),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut content = column![label_row, embed_row, reset_row].spacing(12);

        if let Some(operation) = self.running {
            content = content.push(text(format!("{}...", operation)).size(13));
        }

        match &self.last_outcome {
            Some((_, Ok(message))) => {
                content = content.push(text(message).size(13).style(app_theme::muted_text));
            }
            Some((_, Err(error))) => {
                content = content.push(text(error).size(13).style(app_theme::error_text));
            }
            None => {}
        }

        content.into()
    }
}
