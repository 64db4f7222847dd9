// ABOUTME: Stylesheet resources for the json-slides application
// ABOUTME: Loads local CSS files whose contents become a presentation's extra styles

use crate::errors::{Result, SlideError};
use log::info;
use std::fs;
use std::path::Path;

/// A local stylesheet appended after the built-in styles on export.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub path: String,
    pub is_remote: bool,
}

impl StyleSheet {
    /// Create a new StyleSheet from a path string.
    /// URLs are recognised so they can be rejected when loaded.
    pub fn new(path: &str) -> Self {
        let is_remote = path.starts_with("http://") || path.starts_with("https://");
        Self {
            path: path.to_string(),
            is_remote,
        }
    }

    /// Read the stylesheet from the filesystem.
    pub fn content(&self) -> Result<String> {
        if self.is_remote {
            return Err(SlideError::InvalidResourcePath(format!(
                "Remote stylesheets are not supported: {}",
                self.path
            )));
        }

        info!("Reading local stylesheet: {}", self.path);
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(SlideError::PathNotFoundError(path.to_path_buf()));
        }

        fs::read_to_string(path).map_err(SlideError::FileReadError)
    }
}

/// Concatenate stylesheets in order, so later files win on conflicting selectors.
pub fn load_extra_styles(sheets: &[StyleSheet]) -> Result<String> {
    let mut css = String::new();
    for sheet in sheets {
        let content = sheet.content()?;
        css.push_str(content.trim_end());
        css.push('\n');
    }
    Ok(css)
}
