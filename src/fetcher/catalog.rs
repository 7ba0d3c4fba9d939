//! Category catalog extraction
//!
//! The keywords page assigns its initial state to a script variable
//! (`<marker> = <json>;`). The catalog lives under
//! `keyword.categoryGroups.data`, a list of groups that may each carry a
//! `categories` list.

use crate::fetcher::KeywordFetcher;
use crate::models::Category;
use crate::{ConfigError, KeywordError, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Compiles the pattern isolating `<marker> = <json>;`
///
/// The JSON span ends at the first `;` after the assignment.
pub fn state_pattern(marker: &str) -> std::result::Result<Regex, ConfigError> {
    Regex::new(&format!(r"(?s){}\s*=\s*(.*?);", regex::escape(marker)))
        .map_err(|e| ConfigError::Validation(format!("Invalid state marker '{}': {}", marker, e)))
}

/// Returns the JSON span assigned to the marker in `html`
///
/// # Errors
///
/// * `Schema("marker not found")` - the page structure changed
pub fn extract_embedded_json<'a>(html: &'a str, pattern: &Regex) -> Result<&'a str> {
    pattern
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|span| span.as_str().trim())
        .ok_or_else(|| KeywordError::schema("marker not found"))
}

/// Flattens every group's `categories` list, keeping group then item order
///
/// Groups without `categories` contribute nothing.
pub fn flatten_categories(state: &Value) -> Result<Vec<Category>> {
    let groups = state
        .get("keyword")
        .and_then(|keyword| keyword.get("categoryGroups"))
        .ok_or_else(|| KeywordError::schema("keyword.categoryGroups not found"))?
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| KeywordError::schema("keyword.categoryGroups.data is not a list"))?;

    let mut categories = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        let Some(list) = group.get("categories") else {
            continue;
        };
        let list = list.as_array().ok_or_else(|| {
            KeywordError::schema(format!("group {} categories is not a list", group_index))
        })?;

        for (index, record) in list.iter().enumerate() {
            let category = Category::deserialize(record).map_err(|e| {
                KeywordError::schema(format!(
                    "group {} category {}: {}",
                    group_index, index, e
                ))
            })?;
            categories.push(category);
        }
    }

    Ok(categories)
}

impl KeywordFetcher {
    /// Fetches the category catalog from the keywords page
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Category>)` - All categories, group order then within-group order
    /// * `Err(KeywordError)` - Transport failure, missing marker, invalid JSON
    ///   or missing catalog root
    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.check_cancelled()?;

        let url = &self.config.endpoints.category_url;
        tracing::info!(url = %url, "Fetching category catalog");

        let html = self.transport.get_text(url, &self.cancel).await?;
        let span = extract_embedded_json(&html, &self.state_pattern)?;
        let state: Value = serde_json::from_str(span)
            .map_err(|e| KeywordError::schema(format!("invalid json: {}", e)))?;

        let categories = flatten_categories(&state)?;
        tracing::info!(count = categories.len(), "Category catalog loaded");

        Ok(categories)
    }
}
