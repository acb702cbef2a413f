use thiserror::Error;

use deedcheck_core::TableError;
use deedcheck_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid reference table: {0}")]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
