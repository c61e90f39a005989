use std::path::PathBuf;

use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    /// Directory served under `/static`, no static routes when `None`.
    pub static_dir_path: Option<PathBuf>,
    pub static_cache_age_sec: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "0.0.0.0".to_string(),
            port: 8875,
            static_dir_path: None,
            static_cache_age_sec: 3600,
        }
    }
}
