#![forbid(unsafe_code)]

//! Error type shared by the Folio state machines.

/// Errors raised by navigation and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A navigation request named a page that does not exist.
    UnknownRoute(String),
    /// A configuration value was rejected during validation or parsing.
    InvalidConfig(String),
}

impl core::fmt::Display for FolioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownRoute(route) => write!(f, "unknown route: {route:?}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for FolioError {}

/// Result alias for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;
