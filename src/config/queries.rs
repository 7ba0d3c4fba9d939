//! Built-in GraphQL documents and browser headers
//!
//! The operation names must match what the server expects exactly, otherwise
//! it answers with a GraphQL-level error.

pub const WHITE_POOL_OPERATION: &str = "getWhitePoolKeywords";

pub const SEARCH_OPERATION: &str = "getSearchCategoryKeywords";

pub const QUERY_WHITE_POOL_KEYWORDS: &str = r#"query getWhitePoolKeywords($input: WhitePoolKeywordInput!) {
  whitePoolKeywords(input: $input) {
    ...Keyword
    __typename
  }
}

fragment Keyword on Keyword {
  categoryId
  challengeable
  challengeableContentCount
  challengedKeyword
  id
  name
  participantCount
  property
  thumbnailUrl
  __typename
}
"#;

pub const QUERY_SEARCH_CATEGORY_KEYWORDS: &str = r#"query getSearchCategoryKeywords($input: SearchKeywordInput!, $paging: PagingInput!) {
  searchCategoryKeywords(input: $input, paging: $paging) {
    items {
      ... on Keyword {
        categoryId
        challengeable
        id
        issueKeyword
        name
        participantCount
        thumbnailUrl
        challengedKeyword
        issueKeyword
        __typename
      }
      __typename
    }
    paging {
      nextCursor
      total
      __typename
    }
    __typename
  }
}
"#;

pub const HTML_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

pub const HTML_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

pub const GRAPHQL_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";
