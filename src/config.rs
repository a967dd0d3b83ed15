use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::GRAPH_BASE_URL;
use crate::error::{GraphError, Result};

pub const ENV_TENANT_ID: &str = "TENANT_ID";
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const ENV_AUTHORITY: &str = "AUTHORITY";
pub const ENV_USER_EMAIL: &str = "USER_EMAIL";
/// Optional override for the Graph root
pub const ENV_GRAPH_BASE_URL: &str = "GRAPH_BASE_URL";

/// Application configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth: AuthConfig,
    /// Mailbox / chat owner used when no explicit user is given
    pub user_email: String,
    pub api: ApiConfig,
}

/// App registration credentials for the client-credentials grant
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// Authority URL, e.g. `https://login.microsoftonline.com/<tenant>`
    pub authority: String,
}

impl AuthConfig {
    /// Token endpoint derived from the authority
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority.trim_end_matches('/'))
    }
}

/// Transport settings, optionally read from `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Graph root, without trailing slash
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_graph_base_url() -> String {
    GRAPH_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graph_base_url: default_graph_base_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiConfig,
}

impl Config {
    /// Get the project directories
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "teams-graph", "teams-graph")
    }

    /// Get the config file path, if a config directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Credentials from the process environment, transport settings from the config file
    pub fn load() -> Result<Self> {
        let api = match Self::config_path() {
            Some(path) => load_api_config(&path)?,
            None => ApiConfig::default(),
        };
        let mut config = Self::from_env()?;
        config.api = api;
        if let Some(url) = env::var(ENV_GRAPH_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.api.graph_base_url = url.trim().trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Resolve credentials from the process environment with default transport settings
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve credentials through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| GraphError::MissingConfig(key.to_string()))
        };

        Ok(Self {
            auth: AuthConfig {
                tenant_id: require(ENV_TENANT_ID)?,
                client_id: require(ENV_CLIENT_ID)?,
                client_secret: require(ENV_CLIENT_SECRET)?,
                authority: require(ENV_AUTHORITY)?
                    .trim_end_matches('/')
                    .to_string(),
            },
            user_email: require(ENV_USER_EMAIL)?,
            api: ApiConfig::default(),
        })
    }
}

/// Read the `[api]` table from a TOML file; a missing file yields defaults
pub fn load_api_config(path: &Path) -> Result<ApiConfig> {
    if !path.exists() {
        return Ok(ApiConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::ConfigFile(format!("{}: {}", path.display(), e)))?;
    let file: FileConfig = toml::from_str(&content)
        .map_err(|e| GraphError::ConfigFile(format!("{}: {}", path.display(), e)))?;
    if file.api.timeout == 0 {
        return Err(GraphError::ConfigFile(format!(
            "{}: api.timeout must be at least 1 second",
            path.display()
        )));
    }
    Ok(file.api)
}
