use std::path::PathBuf;

/// Errors raised while loading the seed catalogue.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A mandatory seed document is absent.
    #[error("required seed document not found: {name} ({path})")]
    DataNotFound { name: &'static str, path: PathBuf },

    /// The document exists but could not be read.
    #[error("failed to read seed document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match its schema.
    #[error("malformed {name} document: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The organization document carries no usable root structure.
    #[error("organization document has no usable root structure")]
    MissingRoot,
}
