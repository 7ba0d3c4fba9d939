use crate::config::queries;
use crate::output::OutputFormat;
use serde::Deserialize;

/// Main configuration structure
///
/// Every table is optional; an empty file yields the built-in defaults that
/// target the live platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointConfig,
    pub http: HttpConfig,
    pub fetch: FetchConfig,
    pub queries: QueryConfig,
    pub output: OutputConfig,
}

/// Remote endpoints and the browser-context headers that go with them
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Page embedding the category catalog
    #[serde(rename = "category-url")]
    pub category_url: String,

    /// GraphQL endpoint for both keyword queries
    #[serde(rename = "graphql-url")]
    pub graphql_url: String,

    /// Origin header sent with GraphQL requests
    pub origin: String,

    /// Referer header sent with GraphQL requests
    pub referer: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            category_url: "https://in.naver.com/keywords".to_string(),
            graphql_url: "https://in.naver.com/graphql".to_string(),
            origin: "https://in.naver.com".to_string(),
            referer: "https://in.naver.com/keywords".to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    #[serde(rename = "html-user-agent")]
    pub html_user_agent: String,

    #[serde(rename = "graphql-user-agent")]
    pub graphql_user_agent: String,

    #[serde(rename = "accept-language-html")]
    pub accept_language_html: String,

    #[serde(rename = "accept-language-graphql")]
    pub accept_language_graphql: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            html_user_agent: queries::HTML_USER_AGENT.to_string(),
            graphql_user_agent: queries::GRAPHQL_USER_AGENT.to_string(),
            accept_language_html: "ko-KR,ko;q=0.9".to_string(),
            accept_language_graphql: "ko-KR,ko;q=0.7".to_string(),
        }
    }
}

/// Fetch engine limits and pacing defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Keywords requested per paginated page
    #[serde(rename = "page-size")]
    pub page_size: u32,

    /// Size of the recommended ("white-pool") keyword set
    #[serde(rename = "recommend-limit")]
    pub recommend_limit: u32,

    /// Upper bound on pages fetched for one category
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Default pacing between pages for the CLI (seconds)
    #[serde(rename = "pace-secs-cli")]
    pub pace_secs_cli: f64,

    /// Default pacing between pages for non-interactive callers (seconds)
    #[serde(rename = "pace-secs-api")]
    pub pace_secs_api: f64,

    /// Variable name the category page assigns its embedded state to
    #[serde(rename = "state-marker")]
    pub state_marker: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            recommend_limit: 3,
            max_pages: 1000,
            pace_secs_cli: 3.0,
            pace_secs_api: 2.0,
            state_marker: "window.__PRELOADED_STATE__".to_string(),
        }
    }
}

/// Versioned GraphQL documents and their operation names
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    #[serde(rename = "white-pool-operation")]
    pub white_pool_operation: String,

    #[serde(rename = "white-pool-keywords")]
    pub white_pool_keywords: String,

    #[serde(rename = "search-operation")]
    pub search_operation: String,

    #[serde(rename = "search-category-keywords")]
    pub search_category_keywords: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            white_pool_operation: queries::WHITE_POOL_OPERATION.to_string(),
            white_pool_keywords: queries::QUERY_WHITE_POOL_KEYWORDS.to_string(),
            search_operation: queries::SEARCH_OPERATION.to_string(),
            search_category_keywords: queries::QUERY_SEARCH_CATEGORY_KEYWORDS.to_string(),
        }
    }
}

/// Where and how the CLI writes keyword files
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,

    pub format: OutputFormat,

    #[serde(rename = "include-recommended")]
    pub include_recommended: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            format: OutputFormat::Txt,
            include_recommended: false,
        }
    }
}
