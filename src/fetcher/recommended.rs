use crate::fetcher::envelope::{project_keywords, unwrap_data};
use crate::fetcher::graphql::white_pool_request;
use crate::fetcher::KeywordFetcher;
use crate::models::Keyword;
use crate::Result;

const WHITE_POOL_KEY: &str = "whitePoolKeywords";

impl KeywordFetcher {
    /// Fetches the small recommended ("white-pool") keyword set of a category
    ///
    /// The server order is returned as is.
    pub async fn fetch_recommended_keywords(&self, category_id: &str) -> Result<Vec<Keyword>> {
        self.check_cancelled()?;
        tracing::debug!(category_id = category_id, "Fetching recommended keywords");

        let body = white_pool_request(&self.config, category_id);
        let envelope = self
            .transport
            .post_json(&self.config.endpoints.graphql_url, &body, &self.cancel)
            .await?;

        let records = unwrap_data(&envelope, WHITE_POOL_KEY)?;
        let keywords = project_keywords(records, WHITE_POOL_KEY)?;

        tracing::info!(
            category_id = category_id,
            count = keywords.len(),
            "Recommended keywords fetched"
        );
        Ok(keywords)
    }
}
