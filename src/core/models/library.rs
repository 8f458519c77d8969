use std::fmt;

use serde::{Deserialize, Serialize};

/// Maintenance actions the search service exposes for its image library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryOperation {
    LabelImages,
    EmbedDescriptions,
    Reset,
}

impl fmt::Display for LibraryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryOperation::LabelImages => write!(f, "Label images"),
            LibraryOperation::EmbedDescriptions => write!(f, "Embed descriptions"),
            LibraryOperation::Reset => write!(f, "Reset library"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Checking,
    Online(String),
    Offline(String),
}

impl ServiceStatus {
    pub fn label(&self) -> String {
        match self {
            ServiceStatus::Checking => "Connecting to search service...".to_string(),
            ServiceStatus::Online(message) => format!("Connected - {}", message),
            ServiceStatus::Offline(error) => format!("Offline - {}", error),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelImagesRequest {
    pub directory: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetLibraryRequest {
    pub confirm: String,
}
