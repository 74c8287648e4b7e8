//! Error types for asset inlining.

use std::io;
use std::path::PathBuf;

/// Why a single input path was left out of the table.
///
/// These never abort a run; they are logged and collected into the
/// [`InlineReport`](crate::InlineReport).
#[derive(Debug)]
pub enum AssetError {
    /// The path does not exist.
    NotFound { path: String },
    /// The path exists but could not be opened or read.
    Read { path: String, source: io::Error },
    /// The path collides with the reserved placeholder key.
    Reserved { path: String },
}

impl AssetError {
    /// The input path this error refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Reserved { path } => path,
        }
    }
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{path} not found"),
            Self::Read { path, source } => write!(f, "ERROR: {path}: {source}"),
            Self::Reserved { path } => write!(f, "ERROR: {path}: key is reserved for the placeholder entry"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from [`DataUrl::parse`](crate::DataUrl::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUrlError {
    /// The string does not start with `data:`.
    MissingScheme,
    /// The string has no `;base64,` marker.
    NotBase64,
    /// The payload is not valid standard base64.
    InvalidPayload(String),
}

impl std::fmt::Display for DataUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingScheme => write!(f, "not a data URL (missing \"data:\" scheme)"),
            Self::NotBase64 => write!(f, "data URL is not base64 encoded"),
            Self::InvalidPayload(msg) => write!(f, "invalid base64 payload: {msg}"),
        }
    }
}

impl std::error::Error for DataUrlError {}

/// Errors that stop a run.
#[derive(Debug)]
pub enum InlineError {
    /// The output module could not be created or written.
    Write { path: PathBuf, source: io::Error },
    /// The configuration is unusable.
    Config(String),
    /// An insert targeted the placeholder key.
    ReservedKey(String),
}

impl std::fmt::Display for InlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::ReservedKey(key) => write!(f, "key {key:?} is reserved"),
        }
    }
}

impl std::error::Error for InlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for inlining operations.
pub type Result<T> = std::result::Result<T, InlineError>;
