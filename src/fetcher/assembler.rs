use crate::config::validate_pace;
use crate::fetcher::KeywordFetcher;
use crate::models::KeywordSet;
use crate::Result;

impl KeywordFetcher {
    /// Fetches the recommended and the full keyword lists of a category
    ///
    /// Both sub-fetches run concurrently. The first error observed is returned
    /// unchanged and no partial set is produced.
    pub async fn fetch_keyword_set(&self, category_id: &str, pace_secs: f64) -> Result<KeywordSet> {
        validate_pace(pace_secs)?;
        self.check_cancelled()?;

        tracing::info!(category_id = category_id, "Collecting keyword set");

        let (recommended, normal) = tokio::try_join!(
            self.fetch_recommended_keywords(category_id),
            self.fetch_all_keywords(category_id, pace_secs),
        )?;

        let set = KeywordSet {
            recommended,
            normal,
        };
        tracing::info!(
            category_id = category_id,
            recommended = set.recommended.len(),
            normal = set.normal.len(),
            "Keyword set collected"
        );
        Ok(set)
    }
}
