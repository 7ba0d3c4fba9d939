//! Keyword file writer

use crate::models::KeywordSet;
use crate::output::format::{render_keyword_set, OutputFormat};
use crate::output::OutputResult;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for a category: the category name without `/`, plus the extension
pub fn keyword_file_name(category_name: &str, format: OutputFormat) -> String {
    let stem: String = category_name.chars().filter(|c| *c != '/').collect();
    format!("{}.{}", stem, format.extension())
}

/// Renders `set` and writes it under `directory`
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - Rendering or writing failed
pub fn save_keywords(
    directory: &Path,
    category_name: &str,
    set: &KeywordSet,
    format: OutputFormat,
    include_recommended: bool,
) -> OutputResult<PathBuf> {
    let content = render_keyword_set(set, format, include_recommended)?;

    fs::create_dir_all(directory)?;
    let path = directory.join(keyword_file_name(category_name, format));
    fs::write(&path, content)?;

    tracing::info!(path = %path.display(), "Keywords written");
    Ok(path)
}
