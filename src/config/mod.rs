//! Configuration module for the site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {:?}", other)),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.variable)
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file backing the blog posts
    pub data_path: PathBuf,
    /// Directory served for every non-API path
    pub static_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("SITE_DATA_PATH")
            .unwrap_or_else(|_| "blog_posts.json".to_string())
            .into();

        let static_dir = env::var("SITE_STATIC_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let raw_addr = env::var("SITE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError {
            variable: "SITE_BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let log_level = env::var("SITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let raw_format = env::var("SITE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
        let log_format = raw_format.parse().map_err(|_| ConfigError {
            variable: "SITE_LOG_FORMAT",
            value: raw_format.clone(),
        })?;

        Ok(Self {
            data_path,
            static_dir,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
