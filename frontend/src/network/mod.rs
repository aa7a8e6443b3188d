pub mod api_client;
pub mod config;

pub use api_client::{ApiClient, IChatApi};
pub use config::ApiConfig;

use std::cell::RefCell;

thread_local! {
    // Page-wide API configuration.  Starts from the build-time
    // `API_BASE_URL` (or same-origin) and can be replaced by `initApiConfig`.
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::new().unwrap_or_default());
}

/// Replace the page-wide API configuration.
pub fn init_api_config(base_url: &str) {
    API_CONFIG.with(|config| *config.borrow_mut() = ApiConfig::from_url(base_url));
}

/// Snapshot of the page-wide API configuration.
pub fn api_config() -> ApiConfig {
    API_CONFIG.with(|config| config.borrow().clone())
}
