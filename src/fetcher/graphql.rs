//! GraphQL request bodies
//!
//! Each body carries `operationName`, `variables` and `query`.

use crate::config::Config;
use serde::Serialize;

/// A GraphQL POST body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub operation_name: &'a str,
    pub variables: V,
    pub query: &'a str,
}

#[derive(Debug, Serialize)]
pub struct WhitePoolVariables<'a> {
    pub input: WhitePoolInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitePoolInput<'a> {
    pub category_id: &'a str,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct SearchVariables<'a> {
    pub input: SearchInput<'a>,
    pub paging: PagingInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput<'a> {
    pub category_id: &'a str,
    /// Name filter; always empty
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PagingInput<'a> {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

/// Body of the recommended ("white-pool") keyword request
pub fn white_pool_request<'a>(
    config: &'a Config,
    category_id: &'a str,
) -> GraphQlRequest<'a, WhitePoolVariables<'a>> {
    GraphQlRequest {
        operation_name: &config.queries.white_pool_operation,
        variables: WhitePoolVariables {
            input: WhitePoolInput {
                category_id,
                limit: config.fetch.recommend_limit,
            },
        },
        query: &config.queries.white_pool_keywords,
    }
}

/// Body of one paginated keyword request; `cursor` is omitted on the first page
pub fn search_request<'a>(
    config: &'a Config,
    category_id: &'a str,
    cursor: Option<&'a str>,
) -> GraphQlRequest<'a, SearchVariables<'a>> {
    GraphQlRequest {
        operation_name: &config.queries.search_operation,
        variables: SearchVariables {
            input: SearchInput {
                category_id,
                name: "",
            },
            paging: PagingInput {
                limit: config.fetch.page_size,
                cursor,
            },
        },
        query: &config.queries.search_category_keywords,
    }
}
