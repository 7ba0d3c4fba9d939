//! Fetch engine for categories and keywords
//!
//! This module contains the core retrieval logic, including:
//! - Extracting the category catalog embedded in the keywords page
//! - The single-shot recommended keyword query
//! - The cursor-driven paginated keyword query with pacing
//! - Assembling both keyword lists into one result
//!
//! Every operation is a method on [`KeywordFetcher`], takes `&self`, and shares
//! no mutable state, so concurrent calls never interfere.

mod assembler;
mod catalog;
mod envelope;
mod graphql;
mod paginated;
mod pacing;
mod recommended;
mod transport;

pub use catalog::{extract_embedded_json, flatten_categories, state_pattern};
pub use envelope::{project_keywords, unwrap_data, UNKNOWN_ERROR};
pub use graphql::{search_request, white_pool_request, GraphQlRequest};
pub use pacing::{NoPacer, Pacer, TokioPacer};
pub use transport::{build_http_client, HttpTransport};

use crate::config::{validate, Config};
use crate::{KeywordError, Result};
use regex::Regex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Category and keyword fetcher bound to one configuration
pub struct KeywordFetcher {
    config: Arc<Config>,
    transport: HttpTransport,
    pacer: Arc<dyn Pacer>,
    cancel: CancellationToken,
    state_pattern: Regex,
}

impl KeywordFetcher {
    /// Creates a fetcher that paces with the tokio timer
    ///
    /// # Returns
    ///
    /// * `Ok(KeywordFetcher)` - Ready to issue requests
    /// * `Err(KeywordError::Config)` - The configuration is invalid
    pub fn new(config: Config) -> Result<Self> {
        validate(&config)?;
        let transport = HttpTransport::new(&config)?;
        let state_pattern = state_pattern(&config.fetch.state_marker)?;

        Ok(Self {
            config: Arc::new(config),
            transport,
            pacer: Arc::new(TokioPacer),
            cancel: CancellationToken::new(),
            state_pattern,
        })
    }

    /// Replaces the pacing strategy
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Arc::new(pacer);
        self
    }

    /// Uses `token` as the abort signal for every operation
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The abort signal; cancelling it fails in-flight and future operations
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(KeywordError::Cancelled);
        }
        Ok(())
    }
}
