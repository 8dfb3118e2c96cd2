use thiserror::Error;

/// Main error type for the `app-utils` crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a quirks file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON quirks document is malformed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML quirks document is malformed
    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    /// A quirks key is not a usable domain name
    #[error("Invalid domain '{0}'")]
    InvalidDomain(String),

    /// Two keys normalize to the same domain
    #[error("Duplicate domain '{0}'")]
    DuplicateDomain(String),

    /// File extension does not map to a known format
    #[error("Unsupported quirks file format: '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
