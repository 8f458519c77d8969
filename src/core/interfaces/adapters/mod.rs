mod image_loader;
mod library_service;
mod search_service;

pub use image_loader::ImageLoader;
pub use library_service::LibraryService;
pub use search_service::SearchService;
