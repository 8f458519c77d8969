pub mod app_theme;
mod library_panel;
mod result_card;
mod search_view;
mod shell_view;

pub use library_panel::{LibraryAction, LibraryPanel, LibraryPanelMessage};
pub use search_view::{SearchView, SearchViewAction, SearchViewMessage};
pub use shell_view::render_shell;
