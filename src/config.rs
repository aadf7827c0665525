// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================
// Values come from `option_env!` (build.rs forwards a local .env file) and
// fall back to development defaults.
// ============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the REST backend; may carry a base path
    pub api_url: String,
    /// How long a notification stays on screen
    pub notification_timeout_ms: u32,
    /// Rows per page on the server-paginated sales screen
    pub sales_page_size: u32,
    /// Rows per page when a screen slices its list locally
    pub users_page_size: u32,
    pub enable_logging: bool,
    /// Client storage key holding the bearer token
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            notification_timeout_ms: 4000,
            sales_page_size: 10,
            users_page_size: 10,
            enable_logging: true,
            token_storage_key: "token".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration baked in at compile time
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            notification_timeout_ms: option_env!("NOTIFICATION_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_timeout_ms),
            sales_page_size: option_env!("SALES_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.sales_page_size),
            users_page_size: option_env!("USERS_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.users_page_size),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
        }
    }

    /// Absolute URL for an API path given as raw segments; each one is percent-encoded once
    pub fn endpoint_url<I>(&self, segments: I) -> Result<Url, url::ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.api_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_slashes_once() {
        let config = AppConfig {
            api_url: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.endpoint_url(["api", "v1", "faqs", "allFAQs"]).unwrap().as_str(),
            "https://api.example.com/api/v1/faqs/allFAQs"
        );
        assert_eq!(
            config.endpoint_url(["api", "v2", "sales", ""]).unwrap().as_str(),
            "https://api.example.com/api/v2/sales/"
        );
    }

    #[test]
    fn endpoint_url_keeps_a_base_path() {
        let config = AppConfig {
            api_url: "https://example.com/backend".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.endpoint_url(["api", "v1", "mentors", "a b"]).unwrap().as_str(),
            "https://example.com/backend/api/v1/mentors/a%20b"
        );
    }

    #[test]
    fn default_notification_timeout_is_four_seconds() {
        assert_eq!(AppConfig::default().notification_timeout_ms, 4000);
    }
}
