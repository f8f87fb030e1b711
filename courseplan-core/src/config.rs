//! Configuration management for courseplan
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (COURSEPLAN_*)
//! 3. Config file (~/.config/courseplan/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::course::Term;
use crate::{Error, Result};

/// Catalog file used when nothing else is configured
pub const DEFAULT_CATALOG_FILE: &str = "courses.json";

/// Catalog-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog JSON document
    pub path: Option<PathBuf>,
}

/// Display-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Term shown when none is requested
    pub default_term: Term,

    /// Text shown in place of an empty meeting time
    pub unscheduled_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_term: Term::Fall,
            unscheduled_label: "TBA".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration
    pub catalog: CatalogConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/courseplan/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("courseplan").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - COURSEPLAN_CATALOG: Path to the catalog JSON document
    /// - COURSEPLAN_TERM: Default term to show
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("COURSEPLAN_CATALOG") {
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Ok(term) = std::env::var("COURSEPLAN_TERM") {
            if let Ok(term) = term.parse::<Term>() {
                self.display.default_term = term;
            }
        }

        self
    }

    /// Apply CLI flag overrides
    ///
    /// The term is chosen per command (`list --term`), so only the catalog
    /// path is a global override.
    pub fn with_cli_overrides(mut self, catalog: Option<PathBuf>) -> Self {
        if let Some(path) = catalog {
            self.catalog.path = Some(path);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(catalog: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(catalog))
    }

    /// Catalog path to use, falling back to `courses.json`
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}
