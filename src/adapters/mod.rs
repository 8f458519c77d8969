#[cfg(test)]
pub(crate) mod canned_http;
mod http_image_loader;
mod http_library_service;
mod http_search_service;
mod service_bundle;

pub use http_image_loader::HttpImageLoader;
pub use http_library_service::{is_reset_confirmed, HttpLibraryService};
pub use http_search_service::HttpSearchService;
pub use service_bundle::{ServiceBundle, ServiceConnector};
