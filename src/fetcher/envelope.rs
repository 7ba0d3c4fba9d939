//! GraphQL envelope validation
//!
//! Classifies a decoded `{ errors?, data? }` envelope into success,
//! GraphQL-level error or missing data, and projects keyword records.

use crate::models::Keyword;
use crate::{KeywordError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Message used when the server reports an error without text
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Returns the value at `data[key]` of a GraphQL envelope
///
/// # Errors
///
/// * `GraphQl` - `errors` is a non-empty array; carries the first message
/// * `Schema` - the envelope is not an object, or `data` / `data[key]` is absent
pub fn unwrap_data<'a>(envelope: &'a Value, key: &str) -> Result<&'a Value> {
    let object = envelope
        .as_object()
        .ok_or_else(|| KeywordError::schema("response envelope is not an object"))?;

    if let Some(errors) = object.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR);
            tracing::warn!(key = key, error = message, "GraphQL error in response");
            return Err(KeywordError::GraphQl(message.to_string()));
        }
    }

    let data = object
        .get("data")
        .filter(|data| !data.is_null())
        .ok_or_else(|| KeywordError::schema("response has no data"))?;

    data.get(key)
        .filter(|value| !value.is_null())
        .ok_or_else(|| KeywordError::schema(format!("response data has no '{}'", key)))
}

/// Projects a list of keyword records down to `{name, participantCount}`
///
/// Server order is kept; extra fields are dropped.
pub fn project_keywords(records: &Value, context: &str) -> Result<Vec<Keyword>> {
    let records = records
        .as_array()
        .ok_or_else(|| KeywordError::schema(format!("{} is not a list", context)))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Keyword::deserialize(record).map_err(|e| {
                KeywordError::schema(format!("{} record {}: {}", context, index, e))
            })
        })
        .collect()
}
