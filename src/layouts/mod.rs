// ABOUTME: Slide layouts: per-variant validation of raw slide data and rendering to markup
// ABOUTME: Typed `Layout` trait plus the object-safe `SlideLayout` the registry stores

mod single_column;
mod title;
mod two_column;

pub use single_column::SingleColumnLayout;
pub use title::TitleSlideLayout;
pub use two_column::TwoColumnLayout;

use crate::errors::{Column, ContentError};
use serde_json::{Map, Value};

/// A slide content variant.
///
/// `validate` is the only way to obtain `Self::Content`, so `render` never
/// sees unchecked data.
pub trait Layout {
    /// Tag selecting this layout in a slide's `content.type`.
    const TAG: &'static str;

    type Content;

    fn validate(&self, raw: &Value) -> Result<Self::Content, ContentError>;

    fn render(&self, content: &Self::Content) -> String;
}

/// Type-erased layout, as stored in the registry.
pub trait SlideLayout: Send + Sync {
    fn tag(&self) -> &'static str;

    /// Validate raw slide data and render it.
    fn render_slide(&self, raw: &Value) -> Result<String, ContentError>;
}

impl<L> SlideLayout for L
where
    L: Layout + Send + Sync,
{
    fn tag(&self) -> &'static str {
        L::TAG
    }

    fn render_slide(&self, raw: &Value) -> Result<String, ContentError> {
        let content = self.validate(raw)?;
        Ok(self.render(&content))
    }
}

/// The built-in layout family.
pub fn builtin_layouts() -> Vec<Box<dyn SlideLayout>> {
    vec![
        Box::new(TitleSlideLayout),
        Box::new(SingleColumnLayout),
        Box::new(TwoColumnLayout),
    ]
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, ContentError> {
    raw.as_object().ok_or(ContentError::NotAnObject)
}

/// Required, non-empty `title`.
fn required_title(fields: &Map<String, Value>) -> Result<String, ContentError> {
    match fields.get("title") {
        Some(Value::String(title)) if !title.is_empty() => Ok(title.clone()),
        _ => Err(ContentError::MissingTitle),
    }
}

/// Optional text field. Present values must be strings; empty strings read as absent.
fn optional_text(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ContentError> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ContentError::InvalidText { field }),
    }
}

fn bullet_array<'a>(
    fields: &'a Map<String, Value>,
    column: Option<Column>,
) -> Result<&'a Vec<Value>, ContentError> {
    fields
        .get("bullets")
        .and_then(Value::as_array)
        .ok_or(ContentError::BulletsNotArray(column))
}

fn bullet_texts(items: &[Value], column: Option<Column>) -> Result<Vec<String>, ContentError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ContentError::BulletNotText {
                    column,
                    index: i + 1,
                })
        })
        .collect()
}

fn render_bullets(markup: &mut String, bullets: &[String]) {
    markup.push_str("<ul class=\"bullet-list\">");
    for bullet in bullets {
        markup.push_str(&format!("<li>{}</li>", crate::utils::escape_html(bullet)));
    }
    markup.push_str("</ul>\n");
}
