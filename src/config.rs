// src/config.rs
//! Process-wide configuration, loaded once at startup.

use crate::providers::linkedin;
use crate::scraping::sites::{builtin_sites, SiteDescriptor};
use crate::types::request::default_site_names;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "JOB_AGGREGATOR_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub server: ListenConfig,
    pub provider: ProviderConfig,
    pub locations: LocationConfig,
    pub sites: Vec<SiteDescriptor>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            server: ListenConfig::default(),
            provider: ProviderConfig::default(),
            locations: LocationConfig::default(),
            sites: builtin_sites(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub address: String,
    pub port: u16,
    /// Value of `Access-Control-Allow-Origin` on API responses.
    pub allowed_origin: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origin: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Remote tabular search service. When unset the native LinkedIn provider is used.
    pub endpoint: Option<String>,
    pub linkedin_base_url: String,
    /// Structured-source sites used when a request names none. When unset,
    /// follows the active provider (see [`ProviderConfig::search_sites`]).
    pub default_sites: Option<Vec<String>>,
    /// Sites whose rows arrive without descriptions and get a detail-page fetch.
    pub description_sites: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            linkedin_base_url: "https://www.linkedin.com".to_string(),
            default_sites: None,
            description_sites: vec![linkedin::SITE_NAME.to_string()],
        }
    }
}

impl ProviderConfig {
    /// The native provider only serves LinkedIn; a remote service gets the full default list.
    pub fn search_sites(&self) -> Vec<String> {
        match (&self.default_sites, &self.endpoint) {
            (Some(sites), _) => sites.clone(),
            (None, Some(_)) => default_site_names(),
            (None, None) => vec![linkedin::SITE_NAME.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Accept only "remote" and "worldwide".
    pub sentinels_only: bool,
    /// Additional accepted locations on top of the built-in list.
    pub extra: Vec<String>,
}

impl AppConfig {
    /// Load from `$JOB_AGGREGATOR_CONFIG`, else `./config.yaml` when present,
    /// else built-in defaults. Environment overrides are applied last.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                info!("No configuration file found, using built-in defaults");
                Self::default()
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid YAML configuration")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("JOB_PROVIDER_URL") {
            if !endpoint.trim().is_empty() {
                self.provider.endpoint = Some(endpoint);
            }
        }

        if let Some(port) = std::env::var("ROCKET_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
        {
            self.server.port = port;
        }
    }
}
