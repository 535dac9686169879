use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::views::normalize_base_path;

/// Application configuration loaded from environment variables.
/// Every variable is optional; `PORT` must parse when set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Deployment prefix for view routes, normalized to `/` or `/prefix`.
    pub base_url: String,
    /// When set, views are read from `<dir>/<view>.html` instead of the
    /// documents compiled into the binary.
    pub views_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            base_url: "/".to_string(),
            views_dir: None,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            base_url: normalize_base_path(
                &std::env::var("BASE_URL").unwrap_or_else(|_| "/".to_string()),
            ),
            views_dir: std::env::var("VIEWS_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
