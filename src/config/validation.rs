use crate::config::types::{Config, EndpointConfig, FetchConfig, HttpConfig, QueryConfig};
use crate::{ConfigError, KeywordError};
use std::time::Duration;
use url::Url;

/// Smallest accepted pacing interval (seconds)
pub const MIN_PACE_SECS: f64 = 0.0;

/// Largest accepted pacing interval (seconds)
pub const MAX_PACE_SECS: f64 = 10.0;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_endpoints(&config.endpoints)?;
    validate_http_config(&config.http)?;
    validate_fetch_config(&config.fetch)?;
    validate_queries(&config.queries)?;
    Ok(())
}

/// Converts a caller-supplied pacing interval into a duration
///
/// Rejects NaN, infinities and anything outside `[0, 10]` seconds.
pub fn validate_pace(pace_secs: f64) -> Result<Duration, KeywordError> {
    if !pace_secs.is_finite() || !(MIN_PACE_SECS..=MAX_PACE_SECS).contains(&pace_secs) {
        return Err(KeywordError::InvalidPace(pace_secs));
    }
    Ok(Duration::from_secs_f64(pace_secs))
}

fn validate_endpoints(config: &EndpointConfig) -> Result<(), ConfigError> {
    validate_http_url("category-url", &config.category_url)?;
    validate_http_url("graphql-url", &config.graphql_url)?;
    Ok(())
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 60 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 60, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.page_size < 1 {
        return Err(ConfigError::Validation(
            "page-size must be >= 1, got 0".to_string(),
        ));
    }

    if config.recommend_limit < 1 {
        return Err(ConfigError::Validation(
            "recommend-limit must be >= 1, got 0".to_string(),
        ));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1, got 0".to_string(),
        ));
    }

    for (field, value) in [
        ("pace-secs-cli", config.pace_secs_cli),
        ("pace-secs-api", config.pace_secs_api),
    ] {
        if validate_pace(value).is_err() {
            return Err(ConfigError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field, MIN_PACE_SECS, MAX_PACE_SECS, value
            )));
        }
    }

    if config.state_marker.trim().is_empty() {
        return Err(ConfigError::Validation(
            "state-marker cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_queries(config: &QueryConfig) -> Result<(), ConfigError> {
    validate_query(
        "white-pool",
        &config.white_pool_operation,
        &config.white_pool_keywords,
    )?;
    validate_query(
        "search",
        &config.search_operation,
        &config.search_category_keywords,
    )?;
    Ok(())
}

/// The operation name must be declared by its own document
fn validate_query(label: &str, operation: &str, document: &str) -> Result<(), ConfigError> {
    if operation.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{}-operation cannot be empty",
            label
        )));
    }

    if document.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} query document cannot be empty",
            label
        )));
    }

    if !document.contains(&format!("query {}", operation)) {
        return Err(ConfigError::Validation(format!(
            "{} query document does not declare operation '{}'",
            label, operation
        )));
    }

    Ok(())
}
