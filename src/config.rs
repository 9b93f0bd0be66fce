use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
static DEFAULT_SESSION_COOKIE: &str = "hub-session";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_session_cookie() -> String {
    DEFAULT_SESSION_COOKIE.to_string()
}

/// Global configuration at ~/.config/clubhub/config.toml
///
/// `CLUBHUB_API_BASE_URL` overrides the base URL for one-off runs against a
/// different backend.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Session cookie value issued by the hub's browser login. Optional for
    /// backends that don't gate the API (e.g. local development).
    #[serde(default)]
    pub session: Option<String>,

    /// Cookie name the backend expects; deployments configure their own.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            session: None,
            session_cookie: default_session_cookie(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("clubhub");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("CLUBHUB_API_BASE_URL") {
            config.api_base_url = url;
        }

        Ok(config)
    }
}
