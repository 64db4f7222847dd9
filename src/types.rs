// ABOUTME: Domain types shared across the pipeline stages
// ABOUTME: Manifest metadata, typed slide content and the rendered presentation

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document-wide colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Presentation-wide metadata from the manifest header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// ISO date (YYYY-MM-DD), kept verbatim.
    #[serde(default)]
    pub creation_date: String,

    #[serde(default)]
    pub theme: Theme,
}

/// A manifest whose top-level shape has been checked.
///
/// Slides stay untyped here: each one is only interpreted during rendering,
/// by the layout its content tag selects.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub metadata: Metadata,
    pub slides: Vec<Value>,
}

/// Validated content of a title slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlideContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub date: Option<String>,
}

/// Validated content of a single-column slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleColumnContent {
    pub title: String,
    pub bullets: Vec<String>,
    pub note: Option<String>,
}

/// One side of a two-column slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnContent {
    pub heading: Option<String>,
    pub bullets: Vec<String>,
}

/// Validated content of a two-column slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoColumnContent {
    pub title: String,
    pub left: ColumnContent,
    pub right: ColumnContent,
}

/// Markup for one slide, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSlide {
    pub id: i64,
    pub markup: String,
}

/// Terminal artifact of the engine, consumed by preview and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPresentation {
    pub metadata: Metadata,
    pub slides: Vec<RenderedSlide>,
    /// Appended verbatim after the built-in stylesheet on export.
    pub extra_styles: String,
}

impl RenderedPresentation {
    pub fn new(metadata: Metadata, slides: Vec<RenderedSlide>) -> Self {
        Self {
            metadata,
            slides,
            extra_styles: String::new(),
        }
    }

    /// Replace the extra stylesheet appended on export.
    pub fn with_extra_styles(mut self, css: impl Into<String>) -> Self {
        self.extra_styles = css.into();
        self
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
