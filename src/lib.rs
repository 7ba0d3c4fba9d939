//! Influencer-Keywords: a category and keyword harvester
//!
//! This crate fetches the category catalog and the per-category keyword
//! listings of the Naver influencer platform, validates the responses, and
//! renders the results as txt, tsv or csv.

pub mod config;
pub mod fetcher;
pub mod menu;
pub mod models;
pub mod output;

use thiserror::Error;

/// Main error type for fetch operations
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network failure, non-2xx status, timeout or an undecodable body
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Response structurally inconsistent with the expected shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Application-level error reported by the GraphQL server
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Pacing interval must be between 0 and 10 seconds, got {0}")]
    InvalidPace(f64),
}

impl KeywordError {
    /// Builds a schema error from anything printable
    pub fn schema(message: impl Into<String>) -> Self {
        KeywordError::Schema(message.into())
    }

    /// Whether the failure originated upstream (network or response content)
    ///
    /// Shells built on top of the fetcher map these to a gateway-style failure.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            KeywordError::Transport { .. } | KeywordError::Schema(_) | KeywordError::GraphQl(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, KeywordError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::KeywordFetcher;
pub use models::{Category, Keyword, KeywordSet};
pub use output::OutputFormat;
