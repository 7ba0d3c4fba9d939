//! Configuration module for Influencer-Keywords
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a built-in default, so a missing file is not an error for
//! callers that use [`load_config_or_default`].
//!
//! # Example
//!
//! ```no_run
//! use influencer_keywords::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("keywords.toml")).unwrap();
//! println!("Page size: {}", config.fetch.page_size);
//! ```

mod parser;
pub mod queries;
mod types;
mod validation;

// Re-export types
pub use types::{Config, EndpointConfig, FetchConfig, HttpConfig, OutputConfig, QueryConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::{validate, validate_pace, MAX_PACE_SECS, MIN_PACE_SECS};
