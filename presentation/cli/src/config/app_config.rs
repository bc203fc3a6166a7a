use super::{api_config::ApiConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
