//! Dashboard configuration.
//!
//! Configuration is a small YAML file. Every key is optional:
//!
//! ```yaml
//! format: text          # text | json | yaml
//! log_filter: warn      # tracing filter when PLANBOARD_LOG is unset
//! projects:
//!   page_size: 12
//!   sort: { field: due_date, dir: asc }
//! team:
//!   page_size: 10
//! ```
//!
//! A missing file is not an error; the defaults apply. The file is found via
//! `--config` or the [`CONFIG_ENV`] environment variable.

use std::fs;
use std::io;
use std::path::Path;

use planboard_query::{QueryDescriptor, SortSpec, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanboardError, Result};
use crate::render::OutputFormat;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PLANBOARD_CONFIG";

/// Environment variable holding the tracing filter. Takes precedence over
/// [`PlanboardConfig::log_filter`].
pub const LOG_ENV: &str = "PLANBOARD_LOG";

/// Rows per page on the team list unless configured.
pub const DEFAULT_TEAM_PAGE_SIZE: usize = 10;

/// Settings for one dashboard list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page; `None` uses the list's own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Initial sort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: None,
            sort: Some(SortSpec::asc("name")),
        }
    }
}

impl ListConfig {
    /// The starting descriptor for this list.
    pub fn descriptor(&self, default_page_size: usize) -> Result<QueryDescriptor> {
        let mut descriptor =
            QueryDescriptor::new().with_page_size(self.page_size.unwrap_or(default_page_size))?;
        if let Some(sort) = &self.sort {
            descriptor = descriptor.with_sort(sort.clone());
        }
        Ok(descriptor)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanboardConfig {
    pub projects: ListConfig,
    pub team: ListConfig,
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
    /// `tracing` filter directive, e.g. `warn` or `planboard_query=trace`.
    pub log_filter: String,
}

impl Default for PlanboardConfig {
    fn default() -> Self {
        Self {
            projects: ListConfig::default(),
            team: ListConfig::default(),
            format: OutputFormat::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl PlanboardConfig {
    /// Loads configuration from `path`, or defaults when there is no path or
    /// no file at it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match fs::read_to_string(path) {
            Ok(text) => Self::from_yaml(&text).map_err(|source| PlanboardError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found; using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(PlanboardError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses configuration text. Blank text yields the defaults.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Starting descriptor for the projects list.
    pub fn projects_descriptor(&self) -> Result<QueryDescriptor> {
        self.projects.descriptor(DEFAULT_PAGE_SIZE)
    }

    /// Starting descriptor for the team list.
    pub fn team_descriptor(&self) -> Result<QueryDescriptor> {
        self.team.descriptor(DEFAULT_TEAM_PAGE_SIZE)
    }
}
