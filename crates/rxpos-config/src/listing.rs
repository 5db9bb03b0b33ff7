//! # Listing Configuration
//!
//! Page-size and page-button settings for every list view.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     RXPOS_PAGE_SIZE=25                                                  │
//! │     RXPOS_MAX_PAGE_BUTTONS=7                                            │
//! │     RXPOS_PAGE_SIZE_OPTIONS=10,25,50                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/pharmacy/listing.toml (Linux)                             │
//! │     ~/Library/Application Support/com.rxpos.pharmacy/listing.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     10 per page, options [5, 10, 20, 25, 50, 100], 5 page buttons       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Environment variables change `[defaults]` only. Per-view overrides come
//! from the file.
//!
//! ## Configuration File Format
//! ```toml
//! [defaults]
//! page_size = 10
//! page_size_options = [5, 10, 20, 25, 50, 100]
//! max_page_buttons = 5
//!
//! [views.pos_products]
//! page_size = 20
//!
//! [views.expiry_table]
//! page_size = 25
//! max_page_buttons = 7
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use rxpos_core::{
    ListOptions, PageSize, ViewId, DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// File name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "listing.toml";

pub const ENV_PAGE_SIZE: &str = "RXPOS_PAGE_SIZE";
pub const ENV_MAX_PAGE_BUTTONS: &str = "RXPOS_MAX_PAGE_BUTTONS";
pub const ENV_PAGE_SIZE_OPTIONS: &str = "RXPOS_PAGE_SIZE_OPTIONS";

// =============================================================================
// Defaults Section
// =============================================================================

/// Settings every view starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDefaults {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Choices offered by the page-size selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    /// Width of the numbered page-button window.
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    PAGE_SIZE_OPTIONS.to_vec()
}

fn default_max_page_buttons() -> usize {
    DEFAULT_MAX_PAGE_BUTTONS
}

impl Default for ListDefaults {
    fn default() -> Self {
        ListDefaults {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            max_page_buttons: default_max_page_buttons(),
        }
    }
}

/// Per-view override. Unset fields fall back to `[defaults]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_buttons: Option<usize>,
}

// =============================================================================
// Listing Configuration
// =============================================================================

/// Complete listing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default)]
    pub defaults: ListDefaults,

    /// Keyed by view id (`inventory`, `pos_products`, ...).
    #[serde(default)]
    pub views: BTreeMap<String, ViewOverride>,
}

impl ListingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (listing.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::read_file(config_path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns defaults if anything fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load listing config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads the file only. A missing file yields defaults.
    fn read_file(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let Some(path) = config_path.or_else(Self::default_config_path) else {
            debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading listing config from file");
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Listing config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let defaults = &self.defaults;

        if defaults.page_size_options.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "page_size_options must not be empty".into(),
            ));
        }

        for &option in &defaults.page_size_options {
            PageSize::new(option)?;
        }

        PageSize::from_options(defaults.page_size, &defaults.page_size_options)?;
        ListOptions::new(PageSize::default(), defaults.max_page_buttons)?;

        for name in self.views.keys() {
            let view: ViewId = name
                .parse()
                .map_err(|_| ConfigError::UnknownView(name.clone()))?;
            self.list_options(view)?;
        }

        Ok(())
    }

    /// Applies `RXPOS_*` overrides from the process environment.
    fn apply_env_overrides(&mut self) {
        self.apply_env_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup`. Unparseable values are
    /// logged and skipped.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(size) => {
                    debug!(page_size = size, "Overriding page size from environment");
                    self.defaults.page_size = size;
                }
                Err(_) => warn!(value = %raw, "Ignoring non-numeric {}", ENV_PAGE_SIZE),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_PAGE_BUTTONS) {
            match raw.trim().parse::<usize>() {
                Ok(buttons) => {
                    debug!(max_page_buttons = buttons, "Overriding page buttons from environment");
                    self.defaults.max_page_buttons = buttons;
                }
                Err(_) => warn!(value = %raw, "Ignoring non-numeric {}", ENV_MAX_PAGE_BUTTONS),
            }
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE_OPTIONS) {
            let parsed: Result<Vec<usize>, _> = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::parse::<usize>)
                .collect();

            match parsed {
                Ok(options) => {
                    debug!(?options, "Overriding page size options from environment");
                    self.defaults.page_size_options = options;
                }
                Err(_) => warn!(value = %raw, "Ignoring malformed {}", ENV_PAGE_SIZE_OPTIONS),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rxpos", "pharmacy")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolved pagination settings for one view.
    pub fn list_options(&self, view: ViewId) -> ConfigResult<ListOptions> {
        let overrides = self.views.get(view.as_str()).cloned().unwrap_or_default();

        let size = overrides.page_size.unwrap_or(self.defaults.page_size);
        let buttons = overrides
            .max_page_buttons
            .unwrap_or(self.defaults.max_page_buttons);

        let page_size = PageSize::from_options(size, &self.defaults.page_size_options)?;
        Ok(ListOptions::new(page_size, buttons)?)
    }

    /// Choices for the page-size selector.
    pub fn page_size_options(&self) -> &[usize] {
        &self.defaults.page_size_options
    }

    /// Sets or replaces one view's override.
    pub fn set_override(&mut self, view: ViewId, overrides: ViewOverride) {
        self.views.insert(view.as_str().to_string(), overrides);
    }
}
