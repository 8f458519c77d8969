mod image_source;
mod library;
mod request_ticket;
mod result_image;
mod search_error;
mod search_result;
pub mod service_url;
mod user_settings;

pub use image_source::ImageSource;
pub use library::{
    LabelImagesRequest, LibraryOperation, ResetLibraryRequest, ServiceErrorDetail,
    ServiceMessage, ServiceStatus,
};
pub use request_ticket::RequestTicket;
pub use result_image::{CardImage, ResultImage};
pub use search_error::SearchError;
pub use search_result::{format_distance, SearchRequest, SearchResponse, SearchResult};
pub use user_settings::{RequestTimeoutChoice, ResultCardStyle, ThemeMode, UserSettings};
