use crate::constants::DELETE_ENDPOINT;
use crate::models::ChatId;

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same-origin configuration: endpoints are emitted as relative paths
    /// (`/api/delete/{id}`), which is how the server-rendered pages call the
    /// API when no `API_BASE_URL` was baked in at build time.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the delete endpoint for one chat.  The id is not escaped.
    pub fn delete_chat_url(&self, chat_id: &ChatId) -> String {
        format!("{}{}/{}", self.base_url, DELETE_ENDPOINT, chat_id)
    }
}
