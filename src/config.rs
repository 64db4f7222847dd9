// ABOUTME: Configuration module for the json-slides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::resources::StyleSheet;
use std::env;

/// Settings for the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// `lang` attribute of the document root.
    pub lang: String,
    /// Whether to emit the navigation controls and their script.
    pub navigation: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            navigation: true,
        }
    }
}

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub extra_css: Vec<StyleSheet>,
    pub document_lang: String,
    pub navigation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_css: Vec::new(),
            document_lang: "en".to_string(),
            navigation: true,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let extra_css = env::var("SLIDES_EXTRA_CSS")
            .ok()
            .map(|value| parse_stylesheet_list(&value))
            .unwrap_or_default();
        let document_lang = env::var("SLIDES_DOCUMENT_LANG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "en".to_string());
        let navigation = env::var("SLIDES_NAVIGATION")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            extra_css,
            document_lang,
            navigation,
        }
    }

    /// Get an export configuration with defaults from this config
    pub fn get_export_config(
        &self,
        lang: Option<String>,
        navigation: Option<bool>,
    ) -> ExportConfig {
        ExportConfig {
            lang: lang.unwrap_or_else(|| self.document_lang.clone()),
            navigation: navigation.unwrap_or(self.navigation),
        }
    }
}

fn parse_stylesheet_list(value: &str) -> Vec<StyleSheet> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(StyleSheet::new)
        .collect()
}
