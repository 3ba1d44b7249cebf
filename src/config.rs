// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::filters::{SortOption, ViewMode, VisibilityFilter};

/// Starting filter state for the interactive browse loop.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseOpts {
    #[serde(default = "default_sort_by")]
    pub sort_by: SortOption,

    #[serde(default = "default_visibility")]
    pub visibility: VisibilityFilter,

    #[serde(default = "default_view_mode")]
    pub view_mode: ViewMode,
}

fn default_sort_by() -> SortOption {
    SortOption::Created
}

fn default_visibility() -> VisibilityFilter {
    VisibilityFilter::All
}

fn default_view_mode() -> ViewMode {
    ViewMode::Card
}

impl Default for BrowseOpts {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            visibility: default_visibility(),
            view_mode: default_view_mode(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Base URL of the tmarks server
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Optional bearer token sent with every request
    #[serde(default)]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Options for the interactive browse loop
    #[serde(default)]
    pub browse: BrowseOpts,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            request_timeout_secs: default_request_timeout(),
            browse: BrowseOpts::default(),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/tmarks/config.toml"))
}

/// Load settings: defaults, then config file, then environment overrides.
#[instrument(level = "debug")]
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let path = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path(),
    };

    if let Some(path) = path {
        if path.exists() {
            trace!("Loading config from: {:?}", path);
            let config_text = std::fs::read_to_string(&path)?;
            settings = toml::from_str::<Settings>(&config_text).map_err(|e| {
                DomainError::Other(format!("Invalid config file {:?}: {}", path, e))
            })?;
        } else if config_path.is_some() {
            // An explicitly requested file that does not exist is an error;
            // a missing default location just means defaults apply.
            return Err(DomainError::Other(format!(
                "Config file not found: {:?}",
                path
            )));
        }
    }

    if let Ok(api_url) = std::env::var("TMARKS_API_URL") {
        trace!("Using TMARKS_API_URL from environment");
        settings.api_url = api_url;
    }

    if let Ok(api_token) = std::env::var("TMARKS_API_TOKEN") {
        trace!("Using TMARKS_API_TOKEN from environment");
        settings.api_token = Some(api_token);
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
