//! Error types for the dashboard.

use std::io;
use std::path::PathBuf;

use planboard_query::QueryError;

/// Errors that can occur while loading configuration or producing output.
///
/// List rendering itself does not fail on bad filter or sort fields; those
/// become warnings on the view.
#[derive(Debug, thiserror::Error)]
pub enum PlanboardError {
    /// Failed to read the config file.
    #[error("Failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid YAML for [`PlanboardConfig`](crate::config::PlanboardConfig).
    #[error("Invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A descriptor could not be built from user input.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Output serialization failed.
    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Output serialization failed.
    #[error("Failed to serialize YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for dashboard operations.
pub type Result<T> = std::result::Result<T, PlanboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_pass_through() {
        let err = PlanboardError::from(QueryError::InvalidPageSize(0));
        assert_eq!(err.to_string(), "page size must be at least 1, got 0");
    }

    #[test]
    fn read_errors_name_the_path() {
        let err = PlanboardError::ConfigRead {
            path: PathBuf::from("/etc/planboard.yaml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/planboard.yaml"));
    }
}
