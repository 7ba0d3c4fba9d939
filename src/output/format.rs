//! Text renderings of keyword lists

use crate::models::{Keyword, KeywordSet};
use crate::output::{OutputError, OutputResult};
use serde::Deserialize;
use std::fmt;

/// Supported text formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Keyword names only, one per line
    #[default]
    Txt,
    /// `name<TAB>participantCount` per line
    Tsv,
    /// `keyword,participantCount` header followed by one record per keyword
    Csv,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders `keywords` in the given format
pub fn format_keywords(keywords: &[Keyword], format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Txt => Ok(format_txt(keywords)),
        OutputFormat::Tsv => Ok(format_tsv(keywords)),
        OutputFormat::Csv => format_csv(keywords),
    }
}

/// Renders a keyword set, optionally with the recommended keywords on top
///
/// In txt the recommended block is separated from the rest by a blank line;
/// tsv and csv simply prepend the recommended rows.
pub fn render_keyword_set(
    set: &KeywordSet,
    format: OutputFormat,
    include_recommended: bool,
) -> OutputResult<String> {
    if !include_recommended || set.recommended.is_empty() {
        return format_keywords(&set.normal, format);
    }

    match format {
        OutputFormat::Txt => Ok(format!(
            "{}\n\n{}",
            format_txt(&set.recommended),
            format_txt(&set.normal)
        )),
        _ => {
            let combined: Vec<Keyword> = set
                .recommended
                .iter()
                .chain(set.normal.iter())
                .cloned()
                .collect();
            format_keywords(&combined, format)
        }
    }
}

fn format_txt(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .map(|k| k.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_tsv(keywords: &[Keyword]) -> String {
    keywords
        .iter()
        .map(|k| format!("{}\t{}", k.name, k.participant_count))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_csv(keywords: &[Keyword]) -> OutputResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["keyword", "participantCount"])?;
    for keyword in keywords {
        let count = keyword.participant_count.to_string();
        writer.write_record([keyword.name.as_str(), count.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Keyword> {
        vec![Keyword::new("camping", 12), Keyword::new("hiking, trails", 3)]
    }

    #[test]
    fn test_txt() {
        assert_eq!(
            format_keywords(&sample(), OutputFormat::Txt).unwrap(),
            "camping\nhiking, trails"
        );
    }

    #[test]
    fn test_tsv() {
        assert_eq!(
            format_keywords(&sample(), OutputFormat::Tsv).unwrap(),
            "camping\t12\nhiking, trails\t3"
        );
    }

    #[test]
    fn test_csv_quotes_and_header() {
        assert_eq!(
            format_keywords(&sample(), OutputFormat::Csv).unwrap(),
            "keyword,participantCount\ncamping,12\n\"hiking, trails\",3\n"
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_keywords(&[], OutputFormat::Txt).unwrap(), "");
        assert_eq!(
            format_keywords(&[], OutputFormat::Csv).unwrap(),
            "keyword,participantCount\n"
        );
    }

    #[test]
    fn test_render_set_txt_with_recommended() {
        let set = KeywordSet {
            recommended: vec![Keyword::new("top", 99)],
            normal: sample(),
        };

        assert_eq!(
            render_keyword_set(&set, OutputFormat::Txt, true).unwrap(),
            "top\n\ncamping\nhiking, trails"
        );
        assert_eq!(
            render_keyword_set(&set, OutputFormat::Txt, false).unwrap(),
            "camping\nhiking, trails"
        );
    }

    #[test]
    fn test_render_set_tsv_prepends_recommended() {
        let set = KeywordSet {
            recommended: vec![Keyword::new("top", 99)],
            normal: vec![Keyword::new("camping", 12)],
        };

        assert_eq!(
            render_keyword_set(&set, OutputFormat::Tsv, true).unwrap(),
            "top\t99\ncamping\t12"
        );
    }

    #[test]
    fn test_format_command_line_values() {
        use clap::ValueEnum;

        assert_eq!(OutputFormat::from_str("csv", false).unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml", false).is_err());

        let names: Vec<String> = OutputFormat::value_variants()
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(names, vec!["txt", "tsv", "csv"]);
    }
}
