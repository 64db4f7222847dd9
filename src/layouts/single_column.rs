// ABOUTME: Single-column layout
// ABOUTME: Slide title, a bullet list and an optional footnote

use super::{
    as_object, bullet_array, bullet_texts, optional_text, render_bullets, required_title, Layout,
};
use crate::errors::ContentError;
use crate::types::SingleColumnContent;
use crate::utils::escape_html;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleColumnLayout;

impl Layout for SingleColumnLayout {
    const TAG: &'static str = "singleColumn";

    type Content = SingleColumnContent;

    fn validate(&self, raw: &Value) -> Result<SingleColumnContent, ContentError> {
        let fields = as_object(raw)?;
        let title = required_title(fields)?;
        let bullets = bullet_texts(bullet_array(fields, None)?, None)?;
        let note = optional_text(fields, "note")?;

        Ok(SingleColumnContent {
            title,
            bullets,
            note,
        })
    }

    fn render(&self, content: &SingleColumnContent) -> String {
        let mut markup = String::from("<div class=\"layout single-column\">\n");
        markup.push_str(&format!(
            "<h2 class=\"slide-title\">{}</h2>\n",
            escape_html(&content.title)
        ));
        render_bullets(&mut markup, &content.bullets);
        if let Some(note) = &content.note {
            markup.push_str(&format!(
                "<p class=\"slide-note\">{}</p>\n",
                escape_html(note)
            ));
        }
        markup.push_str("</div>");
        markup
    }
}
