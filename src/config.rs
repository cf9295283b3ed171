//! TOML configuration parsing and validation.
//!
//! ```toml
//! [data]
//! path = "./data/articles.json"
//!
//! [view]
//! page_size = 12        # 12, 24 or 48
//! excerpt_length = 100
//!
//! [server]
//! bind = "127.0.0.1:7331"
//! ```
//!
//! Only `[data]` is required.

use anyhow::{Context, Result};
use article_gallery_core::PageSize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON file holding the article array.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            excerpt_length: default_excerpt_length(),
        }
    }
}

fn default_excerpt_length() -> usize {
    article_gallery_core::present::DEFAULT_EXCERPT_LENGTH
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7331".to_string()
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.data.path.as_os_str().is_empty() {
        anyhow::bail!("data.path must not be empty");
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}
