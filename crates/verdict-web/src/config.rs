// Configuration, loaded from `verdict.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub dev: DevConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory served under `/assets` (logo, stylesheet).
    #[serde(default = "default_assets_dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevConfig {
    /// Inject the live-reload layer during development.
    #[serde(default)]
    pub live_reload: bool,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3000
}

fn default_assets_dir() -> String {
    "assets".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

impl Default for DevConfig {
    fn default() -> Self {
        Self { live_reload: false }
    }
}

impl Config {
    /// Loads `verdict.toml` from the current directory; a missing file means
    /// defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("verdict.toml")
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
