use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the storefront API serving products and stock.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_API_URL: API base URL (default: "http://localhost:3333")
    /// - CART_API_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CART_API_URL").ok(),
            env::var("CART_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = timeout_secs
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
