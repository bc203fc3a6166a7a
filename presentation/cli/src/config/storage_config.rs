use std::env;
use std::path::PathBuf;

/// Where the cart survives between runs.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - CART_STORAGE_PATH: storage file (default: ".rocketshoes/storage.json")
    pub fn from_env() -> Self {
        let path = env::var("CART_STORAGE_PATH")
            .unwrap_or_else(|_| ".rocketshoes/storage.json".to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}
