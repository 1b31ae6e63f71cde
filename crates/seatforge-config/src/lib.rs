//! Configuration system for SeatForge.
//!
//! Load session configuration from TOML or YAML files to control the grid
//! extent, the layout acceptance policy and the collaborator endpoints
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatforge_config::{AcceptancePolicy, SessionConfig};
//! use std::time::Duration;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     acceptance_policy = "strict"
//!
//!     [grid]
//!     rows = 6
//!     cols = 8
//!
//!     [service]
//!     base_url = "http://seating.internal:5000"
//!     timeout_seconds = 20
//! "#).unwrap();
//!
//! assert_eq!(config.grid.rows, 6);
//! assert_eq!(config.acceptance_policy, AcceptancePolicy::Strict);
//! assert_eq!(config.service.timeout(), Some(Duration::from_secs(20)));
//! assert_eq!(config.service.generate_url(), "http://seating.internal:5000/generate");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatforge_config::SessionConfig;
//!
//! let config = SessionConfig::load("seating.toml").unwrap_or_default();
//! // Proceeds with a 10x10 grid and local service endpoints
//! ```

use std::path::Path;
use std::time::Duration;

use seatforge_core::GridSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid extent in each direction.
const DEFAULT_GRID_EXTENT: u32 = 10;

/// Default collaborator base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main session configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    /// Extent of the selectable seat grid.
    #[serde(default)]
    pub grid: GridConfig,

    /// What to do with a generated layout that has diagnostics.
    #[serde(default)]
    pub acceptance_policy: AcceptancePolicy,

    /// Layout-generation and export service endpoints.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Export document settings.
    #[serde(default)]
    pub export: ExportConfig,
}

impl SessionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or describes
    /// an unusable configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}",
                self.grid.size()
            )));
        }
        if self.service.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("service.base_url is empty".to_string()));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export.file_name is empty".to_string()));
        }
        Ok(())
    }

    /// Sets the grid extent.
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid = GridConfig { rows, cols };
        self
    }

    /// Sets the acceptance policy.
    pub fn with_acceptance_policy(mut self, policy: AcceptancePolicy) -> Self {
        self.acceptance_policy = policy;
        self
    }

    /// Sets the collaborator base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.service.base_url = base_url.into();
        self
    }

    /// Sets the collaborator request timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.service.timeout_seconds = Some(seconds);
        self
    }

    /// Returns the grid extent.
    ///
    /// Convenience method that delegates to `grid.size()`.
    pub fn grid_size(&self) -> GridSize {
        self.grid.size()
    }
}

/// Grid extent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GridConfig {
    /// Number of rows.
    #[serde(default = "default_grid_extent")]
    pub rows: u32,

    /// Number of columns.
    #[serde(default = "default_grid_extent")]
    pub cols: u32,
}

impl GridConfig {
    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_EXTENT,
            cols: DEFAULT_GRID_EXTENT,
        }
    }
}

fn default_grid_extent() -> u32 {
    DEFAULT_GRID_EXTENT
}

/// Policy for applying a generated layout that carries diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptancePolicy {
    /// Apply the valid part of the layout and report the rest.
    #[default]
    Lenient,

    /// Reject the whole layout if anything is reported.
    Strict,
}

/// Collaborator service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// Base URL shared by both endpoints.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the layout-generation endpoint.
    #[serde(default = "default_generate_path")]
    pub generate_path: String,

    /// Path of the export endpoint.
    #[serde(default = "default_export_path")]
    pub export_path: String,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl ServiceConfig {
    /// Full URL of the layout-generation endpoint.
    pub fn generate_url(&self) -> String {
        join_url(&self.base_url, &self.generate_path)
    }

    /// Full URL of the export endpoint.
    pub fn export_url(&self) -> String {
        join_url(&self.base_url, &self.export_path)
    }

    /// Returns the request timeout as a Duration, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            export_path: default_export_path(),
            timeout_seconds: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_generate_path() -> String {
    "/generate".to_string()
}

fn default_export_path() -> String {
    "/export_pdf".to_string()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Export document configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExportConfig {
    /// File name offered for the downloaded chart.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

fn default_file_name() -> String {
    "seating-chart.pdf".to_string()
}

#[cfg(test)]
mod tests;
