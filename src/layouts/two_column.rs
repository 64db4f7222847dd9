// ABOUTME: Two-column layout for side-by-side comparisons
// ABOUTME: Each column has an optional heading and its own bullet list

use super::{
    as_object, bullet_array, bullet_texts, optional_text, render_bullets, required_title, Layout,
};
use crate::errors::{Column, ContentError};
use crate::types::{ColumnContent, TwoColumnContent};
use crate::utils::escape_html;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct TwoColumnLayout;

fn column_fields(
    fields: &Map<String, Value>,
    column: Column,
) -> Result<&Map<String, Value>, ContentError> {
    let key = match column {
        Column::Left => "left",
        Column::Right => "right",
    };
    fields
        .get(key)
        .and_then(Value::as_object)
        .ok_or(ContentError::MissingColumn(column))
}

fn column_heading(
    fields: &Map<String, Value>,
    column: Column,
) -> Result<Option<String>, ContentError> {
    optional_text(fields, "heading").map_err(|_| ContentError::InvalidHeading(column))
}

impl Layout for TwoColumnLayout {
    const TAG: &'static str = "twoColumn";

    type Content = TwoColumnContent;

    fn validate(&self, raw: &Value) -> Result<TwoColumnContent, ContentError> {
        let fields = as_object(raw)?;
        let title = required_title(fields)?;

        let left = column_fields(fields, Column::Left)?;
        let right = column_fields(fields, Column::Right)?;

        let left_items = bullet_array(left, Some(Column::Left))?;
        let right_items = bullet_array(right, Some(Column::Right))?;

        let left_heading = column_heading(left, Column::Left)?;
        let right_heading = column_heading(right, Column::Right)?;

        let left_bullets = bullet_texts(left_items, Some(Column::Left))?;
        let right_bullets = bullet_texts(right_items, Some(Column::Right))?;

        Ok(TwoColumnContent {
            title,
            left: ColumnContent {
                heading: left_heading,
                bullets: left_bullets,
            },
            right: ColumnContent {
                heading: right_heading,
                bullets: right_bullets,
            },
        })
    }

    fn render(&self, content: &TwoColumnContent) -> String {
        let mut markup = String::from("<div class=\"layout two-column\">\n");
        markup.push_str(&format!(
            "<h2 class=\"slide-title\">{}</h2>\n",
            escape_html(&content.title)
        ));
        markup.push_str("<div class=\"columns\">\n");
        for column in [&content.left, &content.right] {
            markup.push_str("<div class=\"column\">\n");
            if let Some(heading) = &column.heading {
                markup.push_str(&format!(
                    "<h3 class=\"column-heading\">{}</h3>\n",
                    escape_html(heading)
                ));
            }
            render_bullets(&mut markup, &column.bullets);
            markup.push_str("</div>\n");
        }
        markup.push_str("</div>\n</div>");
        markup
    }
}
