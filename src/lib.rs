// ABOUTME: Library module for the json-slides program.
// ABOUTME: Validates JSON slide manifests and renders them to HTML previews and documents.

pub mod app;
pub mod config;
pub mod engine;
pub mod errors;
pub mod html;
pub mod layouts;
pub mod preview;
pub mod registry;
pub mod resources;
pub mod types;
pub mod utils;

// Reexport common types and functions
pub use app::{ExportResponse, ProcessResponse, SlideApp};
pub use config::{Config, ExportConfig};
pub use engine::PresentationEngine;
pub use errors::{Column, ContentError, ErrorCode, ErrorReport, Result, SlideError};
pub use html::{write_html_to_file, HtmlExporter, Palette};
pub use layouts::{Layout, SingleColumnLayout, SlideLayout, TitleSlideLayout, TwoColumnLayout};
pub use preview::generate_preview;
pub use registry::LayoutRegistry;
pub use resources::StyleSheet;
pub use types::{Metadata, RenderedPresentation, RenderedSlide, Theme};
pub use utils::escape_html;
