pub const APPLICATION_TITLE: &str = "AI-Powered Image Search";
pub const APPLICATION_DIRECTORY_NAME: &str = "image-search-desktop";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_SERVICE_BASE_URL: &str = "http://localhost:8000";
pub const SERVICE_URL_ENV_VAR: &str = "IMAGE_SEARCH_URL";

pub const SEARCH_ENDPOINT_PATH: &str = "/search";
pub const HEALTH_ENDPOINT_PATH: &str = "/";
pub const LABEL_IMAGES_ENDPOINT_PATH: &str = "/label-images";
pub const EMBED_TEXT_ENDPOINT_PATH: &str = "/embed-text";
pub const RESET_DB_ENDPOINT_PATH: &str = "/reset-db";

pub const SEARCH_RESULT_LIMIT: u32 = 10;

pub const MESSAGE_SEARCH_FAILED: &str = "Failed to fetch search results";
pub const MESSAGE_SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const RESET_CONFIRMATION_WORD: &str = "YES";

pub const REQUEST_TIMEOUT_CHOICES: [Option<u64>; 4] = [None, Some(10), Some(30), Some(60)];

pub const RESULT_IMAGE_HEIGHT: f32 = 192.0;
pub const RESULT_THUMBNAIL_MAX_EDGE: u32 = 512;

pub const GRID_TWO_COLUMN_MIN_WIDTH: f32 = 640.0;
pub const GRID_THREE_COLUMN_MIN_WIDTH: f32 = 1024.0;

pub const MAIN_WINDOW_SIZE: (f32, f32) = (1100.0, 760.0);
pub const SETTINGS_WINDOW_SIZE: (f32, f32) = (560.0, 720.0);
