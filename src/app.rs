// ABOUTME: Host-facing facade over the engine, preview and exporter
// ABOUTME: Keeps the most recent successful presentation for later export

use crate::config::Config;
use crate::engine::PresentationEngine;
use crate::errors::{ErrorCode, Result, SlideError};
use crate::html::HtmlExporter;
use crate::preview::generate_preview;
use crate::resources::load_extra_styles;
use crate::types::RenderedPresentation;
use log::info;
use serde::Serialize;

/// One conversion session.
///
/// Each successful [`SlideApp::process`] replaces the stored presentation;
/// failures leave it untouched.
#[derive(Default)]
pub struct SlideApp {
    engine: PresentationEngine,
    exporter: HtmlExporter,
    extra_styles: String,
    last_presentation: Option<RenderedPresentation>,
}

impl SlideApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(engine: PresentationEngine, exporter: HtmlExporter) -> Self {
        Self {
            engine,
            exporter,
            extra_styles: String::new(),
            last_presentation: None,
        }
    }

    /// Build an app from configuration, loading any extra stylesheets up front.
    pub fn from_config(config: &Config) -> Result<Self> {
        let exporter = HtmlExporter::new(config.get_export_config(None, None));
        let extra_styles = load_extra_styles(&config.extra_css)?;
        Ok(Self::with_parts(PresentationEngine::new(), exporter).with_extra_styles(extra_styles))
    }

    /// CSS attached to every presentation this app renders.
    pub fn with_extra_styles(mut self, css: impl Into<String>) -> Self {
        self.extra_styles = css.into();
        self
    }

    /// Render a manifest and return the preview of its first slide.
    pub fn process(&mut self, input: &str) -> Result<String> {
        let presentation = self
            .engine
            .process(input)?
            .with_extra_styles(self.extra_styles.clone());
        let preview = generate_preview(&presentation);
        self.last_presentation = Some(presentation);
        Ok(preview)
    }

    /// Export the most recent successful presentation as a full document.
    pub fn export_full(&self) -> Result<String> {
        let presentation = self
            .last_presentation
            .as_ref()
            .ok_or(SlideError::NoPresentationAvailable)?;
        let document = self.exporter.export(presentation);
        info!("Exported document ({} bytes)", document.len());
        Ok(document)
    }

    pub fn last_presentation(&self) -> Option<&RenderedPresentation> {
        self.last_presentation.as_ref()
    }
}

/// Serializable outcome of [`SlideApp::process`].
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl From<Result<String>> for ProcessResponse {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(preview) => Self {
                success: true,
                preview: Some(preview),
                error: None,
                code: None,
            },
            Err(e) => Self {
                success: false,
                preview: None,
                error: Some(e.to_string()),
                code: Some(e.code()),
            },
        }
    }
}

/// Serializable outcome of [`SlideApp::export_full`].
#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl From<Result<String>> for ExportResponse {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(document) => Self {
                success: true,
                document: Some(document),
                error: None,
                code: None,
            },
            Err(e) => Self {
                success: false,
                document: None,
                error: Some(e.to_string()),
                code: Some(e.code()),
            },
        }
    }
}
