//! Output module for rendering and saving keyword lists
//!
//! This module handles:
//! - Rendering keywords as txt, tsv or csv
//! - Merging recommended keywords into the rendering on request
//! - Writing the rendering to a per-category file

mod format;
mod writer;

pub use format::{format_keywords, render_keyword_set, OutputFormat};
pub use writer::{keyword_file_name, save_keywords};

use thiserror::Error;

/// Errors that can occur while rendering or writing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
