//! Cursor-driven keyword pagination
//!
//! # Loop
//!
//! | State | Action |
//! |-------|--------|
//! | Fetch | POST the search query with the current cursor (none on page 1) |
//! | Pace  | Pause for the pacing interval, skipped when it is zero |
//! | Done  | `nextCursor` absent or empty → return everything accumulated |
//!
//! A cursor seen twice, or more pages than `max-pages`, fails with
//! `Schema("pagination did not terminate")`. Any failure discards the
//! keywords accumulated so far.

use crate::config::validate_pace;
use crate::fetcher::envelope::{project_keywords, unwrap_data};
use crate::fetcher::graphql::search_request;
use crate::fetcher::KeywordFetcher;
use crate::models::Keyword;
use crate::{KeywordError, Result};
use serde_json::Value;
use std::collections::HashSet;

const SEARCH_KEY: &str = "searchCategoryKeywords";

/// One decoded page of the search query
#[derive(Debug)]
struct Page {
    keywords: Vec<Keyword>,
    next_cursor: Option<String>,
}

/// Reads `items` and `paging.nextCursor` out of the unwrapped search value
fn parse_page(value: &Value) -> Result<Page> {
    let items = value
        .get("items")
        .ok_or_else(|| KeywordError::schema("searchCategoryKeywords has no items"))?;
    let paging = value
        .get("paging")
        .filter(|paging| paging.is_object())
        .ok_or_else(|| KeywordError::schema("searchCategoryKeywords has no paging"))?;

    let keywords = project_keywords(items, "items")?;

    let next_cursor = match paging.get("nextCursor") {
        None | Some(Value::Null) => None,
        Some(Value::String(cursor)) if cursor.is_empty() => None,
        Some(Value::String(cursor)) => Some(cursor.clone()),
        Some(other) => {
            return Err(KeywordError::schema(format!(
                "paging.nextCursor is not a string: {}",
                other
            )))
        }
    };

    Ok(Page {
        keywords,
        next_cursor,
    })
}

impl KeywordFetcher {
    /// Fetches every keyword of a category, page by page
    ///
    /// # Arguments
    ///
    /// * `category_id` - The category to list
    /// * `pace_secs` - Pause between pages, in `[0, 10]` seconds
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Keyword>)` - All pages concatenated in page order
    /// * `Err(KeywordError)` - The first failure on any page
    pub async fn fetch_all_keywords(&self, category_id: &str, pace_secs: f64) -> Result<Vec<Keyword>> {
        let pace = validate_pace(pace_secs)?;
        let max_pages = self.config.fetch.max_pages;

        let mut keywords = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen_cursors = HashSet::new();
        let mut pages = 0u32;

        loop {
            if pages >= max_pages {
                tracing::warn!(
                    category_id = category_id,
                    pages = pages,
                    "Page limit reached before the last page"
                );
                return Err(KeywordError::schema("pagination did not terminate"));
            }

            self.check_cancelled()?;
            let body = search_request(&self.config, category_id, cursor.as_deref());
            let envelope = self
                .transport
                .post_json(&self.config.endpoints.graphql_url, &body, &self.cancel)
                .await?;
            pages += 1;

            let page = parse_page(unwrap_data(&envelope, SEARCH_KEY)?)?;
            tracing::debug!(
                category_id = category_id,
                page = pages,
                items = page.keywords.len(),
                has_next = page.next_cursor.is_some(),
                "Fetched keyword page"
            );
            keywords.extend(page.keywords);

            let Some(next) = page.next_cursor else {
                break;
            };

            if !seen_cursors.insert(next.clone()) {
                tracing::warn!(
                    category_id = category_id,
                    cursor = %next,
                    "Server repeated a pagination cursor"
                );
                return Err(KeywordError::schema("pagination did not terminate"));
            }

            if !pace.is_zero() {
                self.check_cancelled()?;
                self.pacer.pause(pace, &self.cancel).await?;
            }

            cursor = Some(next);
        }

        tracing::info!(
            category_id = category_id,
            pages = pages,
            count = keywords.len(),
            "All keywords fetched"
        );
        Ok(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_with_cursor() {
        let page = parse_page(&json!({
            "items": [{ "name": "a", "participantCount": 1 }],
            "paging": { "nextCursor": "X", "total": 40 }
        }))
        .unwrap();

        assert_eq!(page.keywords, vec![Keyword::new("a", 1)]);
        assert_eq!(page.next_cursor.as_deref(), Some("X"));
    }

    #[test]
    fn test_parse_page_last_page() {
        for paging in [json!({}), json!({ "nextCursor": null }), json!({ "nextCursor": "" })] {
            let page = parse_page(&json!({ "items": [], "paging": paging })).unwrap();
            assert!(page.next_cursor.is_none());
        }
    }

    #[test]
    fn test_parse_page_missing_items_or_paging() {
        assert!(matches!(
            parse_page(&json!({ "paging": {} })),
            Err(KeywordError::Schema(_))
        ));
        assert!(matches!(
            parse_page(&json!({ "items": [] })),
            Err(KeywordError::Schema(_))
        ));
    }

    #[test]
    fn test_parse_page_non_string_cursor() {
        assert!(matches!(
            parse_page(&json!({ "items": [], "paging": { "nextCursor": 7 } })),
            Err(KeywordError::Schema(_))
        ));
    }
}
