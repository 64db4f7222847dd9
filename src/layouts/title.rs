// ABOUTME: Title slide layout
// ABOUTME: Big centred title with optional subtitle and date

use super::{as_object, optional_text, required_title, Layout};
use crate::errors::ContentError;
use crate::types::TitleSlideContent;
use crate::utils::escape_html;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSlideLayout;

impl Layout for TitleSlideLayout {
    const TAG: &'static str = "titleSlide";

    type Content = TitleSlideContent;

    fn validate(&self, raw: &Value) -> Result<TitleSlideContent, ContentError> {
        let fields = as_object(raw)?;
        let title = required_title(fields)?;
        let subtitle = optional_text(fields, "subtitle")?;
        let date = optional_text(fields, "date")?;

        Ok(TitleSlideContent {
            title,
            subtitle,
            date,
        })
    }

    fn render(&self, content: &TitleSlideContent) -> String {
        let mut markup = String::from("<div class=\"layout title-slide\">\n");
        markup.push_str(&format!(
            "<h1 class=\"title-slide-title\">{}</h1>\n",
            escape_html(&content.title)
        ));
        if let Some(subtitle) = &content.subtitle {
            markup.push_str(&format!(
                "<h2 class=\"title-slide-subtitle\">{}</h2>\n",
                escape_html(subtitle)
            ));
        }
        if let Some(date) = &content.date {
            markup.push_str(&format!(
                "<p class=\"title-slide-date\">{}</p>\n",
                escape_html(date)
            ));
        }
        markup.push_str("</div>");
        markup
    }
}
