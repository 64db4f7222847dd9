// ABOUTME: Presentation engine: parse, structural validation and per-slide rendering
// ABOUTME: Stops at the first failure and never returns a partially rendered presentation

use crate::errors::{Result, SlideError};
use crate::registry::LayoutRegistry;
use crate::types::{Manifest, Metadata, RenderedPresentation, RenderedSlide};
use log::{debug, info, warn};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

static NO_DATA: Value = Value::Null;

#[derive(Default)]
pub struct PresentationEngine {
    registry: LayoutRegistry,
}

impl PresentationEngine {
    /// Engine with the built-in layouts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: LayoutRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    /// Run the whole pipeline over a serialized manifest.
    pub fn process(&self, input: &str) -> Result<RenderedPresentation> {
        let raw = parse(input)?;
        let manifest = validate_manifest(raw)?;
        self.render(&manifest)
    }

    /// Render every slide in manifest order.
    pub fn render(&self, manifest: &Manifest) -> Result<RenderedPresentation> {
        let mut rendered = Vec::with_capacity(manifest.slides.len());

        for (index, slide) in manifest.slides.iter().enumerate() {
            let rendered_slide = self.render_slide(index + 1, slide).map_err(|e| {
                warn!("Discarding {} rendered slide(s): {}", rendered.len(), e);
                e
            })?;
            rendered.push(rendered_slide);
        }

        info!("Rendered {} slide(s)", rendered.len());
        Ok(RenderedPresentation::new(manifest.metadata.clone(), rendered))
    }

    fn render_slide(&self, position: usize, slide: &Value) -> Result<RenderedSlide> {
        let envelope = SlideEnvelope::read(position, slide)?;
        debug!(
            "Rendering slide {} (position {}) as {}",
            envelope.id, position, envelope.tag
        );

        let layout = self
            .registry
            .lookup(envelope.tag)
            .ok_or_else(|| SlideError::UnknownLayoutType {
                slide_id: envelope.id,
                tag: envelope.tag.to_string(),
            })?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| layout.render_slide(envelope.data)))
            .map_err(|payload| SlideError::Internal(panic_message(&*payload)))?;

        let markup = outcome.map_err(|source| SlideError::InvalidContent {
            slide_id: envelope.id,
            source,
        })?;

        Ok(RenderedSlide {
            id: envelope.id,
            markup,
        })
    }
}

/// Decode the raw text. Proves only that it is well-formed JSON.
pub fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| {
        warn!("Manifest is not valid JSON: {}", e);
        SlideError::MalformedInput(e)
    })
}

/// Check the manifest's top-level shape: `metadata` present, `slides` an array.
///
/// Slide contents are left untouched until rendering.
pub fn validate_manifest(raw: Value) -> Result<Manifest> {
    let Value::Object(mut top) = raw else {
        warn!("Manifest is not an object");
        return Err(SlideError::MissingMetadata);
    };

    let metadata = match top.remove("metadata") {
        None | Some(Value::Null) => {
            warn!("Manifest has no metadata");
            return Err(SlideError::MissingMetadata);
        }
        Some(value @ Value::Object(_)) => serde_json::from_value::<Metadata>(value)
            .map_err(|e| SlideError::MalformedMetadata(e.to_string()))?,
        Some(_) => {
            return Err(SlideError::MalformedMetadata(
                "metadata must be an object".to_string(),
            ))
        }
    };

    let slides = match top.remove("slides") {
        Some(Value::Array(slides)) => slides,
        _ => {
            warn!("Manifest slides are not an array");
            return Err(SlideError::MalformedSlideList);
        }
    };

    info!("Manifest \"{}\" has {} slide(s)", metadata.title, slides.len());
    Ok(Manifest { metadata, slides })
}

/// The engine-owned part of a slide: id, content tag and the opaque data.
struct SlideEnvelope<'a> {
    id: i64,
    tag: &'a str,
    data: &'a Value,
}

impl<'a> SlideEnvelope<'a> {
    fn read(position: usize, slide: &'a Value) -> Result<Self> {
        let malformed = |reason: &str| SlideError::MalformedSlide {
            position,
            reason: reason.to_string(),
        };

        let fields = slide
            .as_object()
            .ok_or_else(|| malformed("slide must be an object"))?;
        let id = fields
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| malformed("id must be an integer"))?;
        let content = fields
            .get("content")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed("content must be an object"))?;
        let tag = content
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("content type must be text"))?;

        Ok(Self {
            id,
            tag,
            data: content.get("data").unwrap_or(&NO_DATA),
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "layout panicked".to_string()
    }
}
