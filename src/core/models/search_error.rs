use thiserror::Error;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("{0}")]
    Transport(String),
    #[error("Malformed search response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    pub fn failed_status() -> Self {
        SearchError::Transport(global_constants::MESSAGE_SEARCH_FAILED.to_string())
    }

    /// The single line shown under the search form.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            global_constants::MESSAGE_SOMETHING_WENT_WRONG.to_string()
        } else {
            message
        }
    }
}
