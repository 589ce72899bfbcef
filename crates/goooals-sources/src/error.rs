use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("No goals available")]
    EmptyCatalog,

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("Network response was not ok: {status} {reason}")]
    UpstreamStatus { status: u16, reason: String },
}
