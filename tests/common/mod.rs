#![allow(dead_code)]

use async_trait::async_trait;
use influencer_keywords::fetcher::Pacer;
use influencer_keywords::{Config, KeywordError, KeywordFetcher};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::{Match, MockServer, Request, Respond, ResponseTemplate};

pub const SEARCH_OPERATION: &str = "getSearchCategoryKeywords";
pub const WHITE_POOL_OPERATION: &str = "getWhitePoolKeywords";

/// Creates a test configuration pointing both endpoints at the mock server
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.endpoints.category_url = format!("{}/keywords", server.uri());
    config.endpoints.graphql_url = format!("{}/graphql", server.uri());
    config.http.timeout_secs = 5;
    config
}

pub fn fetcher_for(server: &MockServer, pacer: impl Pacer + 'static) -> KeywordFetcher {
    KeywordFetcher::new(config_for(server))
        .expect("Failed to create fetcher")
        .with_pacer(pacer)
}

/// Records every pause instead of sleeping
#[derive(Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration, cancel: &CancellationToken) -> Result<(), KeywordError> {
        if cancel.is_cancelled() {
            return Err(KeywordError::Cancelled);
        }
        self.pauses.lock().unwrap().push(duration);
        Ok(())
    }
}

/// Matches a search request by its `paging.cursor` (None = first page)
pub struct CursorMatcher(pub Option<&'static str>);

impl Match for CursorMatcher {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return false;
        };
        if body["operationName"] != SEARCH_OPERATION {
            return false;
        }
        let cursor = body["variables"]["paging"].get("cursor");
        match self.0 {
            None => cursor.is_none(),
            Some(expected) => cursor.and_then(Value::as_str) == Some(expected),
        }
    }
}

/// Answers every search request with a fresh cursor, so pagination never ends
pub struct EndlessPages {
    served: AtomicUsize,
}

impl EndlessPages {
    pub fn new() -> Self {
        Self {
            served: AtomicUsize::new(0),
        }
    }
}

impl Respond for EndlessPages {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.served.fetch_add(1, Ordering::SeqCst);
        let cursor = format!("cursor-{}", n);
        let page = search_page(&keywords(&format!("p{}-", n), 2), Some(cursor.as_str()));
        ResponseTemplate::new(200).set_body_json(page)
    }
}

/// `count` keyword records named `<prefix><index>`, with extra fields the
/// server would send
pub fn keywords(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "categoryId": "cat-1",
                "challengeable": true,
                "id": format!("{}{}", prefix, i),
                "name": format!("{}{}", prefix, i),
                "participantCount": i as u64 * 10,
                "thumbnailUrl": null,
                "__typename": "Keyword"
            })
        })
        .collect()
}

/// A search response envelope
pub fn search_page(items: &[Value], next_cursor: Option<&str>) -> Value {
    json!({
        "data": {
            "searchCategoryKeywords": {
                "items": items,
                "paging": { "nextCursor": next_cursor, "total": 999, "__typename": "Paging" },
                "__typename": "KeywordSearchResult"
            }
        }
    })
}

/// A white-pool response envelope
pub fn white_pool_page(items: &[Value]) -> Value {
    json!({ "data": { "whitePoolKeywords": items } })
}

/// The keywords page with the given embedded state
pub fn catalog_html(state: &Value) -> String {
    format!(
        r#"<!doctype html><html><head><title>Keywords</title>
<script>window.__PRELOADED_STATE__ = {};</script>
<script src="/static/app.js"></script></head><body><div id="root"></div></body></html>"#,
        state
    )
}
