mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use tracing::warn;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub bind: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub static_dir: Option<PathBuf>,
    pub static_cache_age_sec: usize,
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            bind: "0.0.0.0".to_string(),
            port: 8875,
            logging_level: RequestsLoggingLevel::Path,
            static_dir: None,
            static_cache_age_sec: 3600,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    /// `None` when no usable static directory was found.
    pub static_dir: Option<PathBuf>,
    pub static_cache_age_sec: usize,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let bind = file.bind.unwrap_or_else(|| cli.bind.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let static_cache_age_sec = file
            .static_cache_age_sec
            .unwrap_or(cli.static_cache_age_sec);

        let static_dir = match file
            .static_dir
            .map(PathBuf::from)
            .or_else(|| cli.static_dir.clone())
        {
            Some(dir) if !dir.exists() => {
                warn!("Static directory {:?} does not exist, skipping it", dir);
                None
            }
            Some(dir) if !dir.is_dir() => {
                bail!("static_dir is not a directory: {:?}", dir);
            }
            other => other,
        };

        let seed = file.seed.or(cli.seed);

        Ok(Self {
            bind,
            port,
            logging_level,
            static_dir,
            static_cache_age_sec,
            seed,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind.clone(),
            port: self.port,
            static_dir_path: self.static_dir.clone(),
            static_cache_age_sec: self.static_cache_age_sec,
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
