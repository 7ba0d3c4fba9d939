//! Value types produced by the fetcher
//!
//! Field names on the wire are camelCase; deserialization ignores every field
//! not listed here, and a missing listed field is a schema violation.

use serde::{Deserialize, Serialize};

/// A keyword category from the catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub keyword_count: u64,
}

/// A keyword and how many influencers take part in it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub name: String,
    pub participant_count: u64,
}

impl Keyword {
    pub fn new(name: impl Into<String>, participant_count: u64) -> Self {
        Self {
            name: name.into(),
            participant_count,
        }
    }
}

/// Recommended and regular keywords of one category
///
/// Neither list is deduplicated; upstream order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    #[serde(rename = "recomm")]
    pub recommended: Vec<Keyword>,
    pub normal: Vec<Keyword>,
}

impl KeywordSet {
    /// Total number of keywords across both lists
    pub fn total(&self) -> usize {
        self.recommended.len() + self.normal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_ignores_extra_fields() {
        let category: Category = serde_json::from_value(json!({
            "id": "c1",
            "name": "Travel",
            "keywordCount": 120,
            "iconUrl": "https://example.com/icon.png"
        }))
        .unwrap();

        assert_eq!(category.id, "c1");
        assert_eq!(category.keyword_count, 120);
    }

    #[test]
    fn test_keyword_requires_participant_count() {
        let result: Result<Keyword, _> = serde_json::from_value(json!({ "name": "camping" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_keyword_set_json_shape() {
        let set = KeywordSet {
            recommended: vec![Keyword::new("a", 1)],
            normal: vec![Keyword::new("b", 2), Keyword::new("b", 2)],
        };

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["recomm"][0]["participantCount"], 1);
        assert_eq!(value["normal"].as_array().unwrap().len(), 2);
        assert_eq!(set.total(), 3);
    }
}
