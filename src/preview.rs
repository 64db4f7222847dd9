// ABOUTME: Preview generation for a rendered presentation
// ABOUTME: Shows only the first slide, inside a small theme-aware container

use crate::types::RenderedPresentation;

pub const NO_SLIDES_NOTICE: &str = "<div class=\"error\">No slides to display</div>";

/// Build the preview fragment for the first rendered slide.
pub fn generate_preview(presentation: &RenderedPresentation) -> String {
    let Some(first) = presentation.slides.first() else {
        return NO_SLIDES_NOTICE.to_string();
    };

    let (background, text) = if presentation.metadata.theme.is_dark() {
        ("#1a1a1a", "white")
    } else {
        ("white", "#333")
    };

    let mut preview = String::from("<style>\n");
    preview.push_str(&format!(
        ".preview-container {{ font-family: Arial, sans-serif; padding: 20px; \
         background: {}; color: {}; border-radius: 8px; }}\n",
        background, text
    ));
    preview.push_str(".preview-container .layout { margin: 0; padding: 20px; }\n");
    preview.push_str(".preview-container ul { text-align: left; }\n");
    preview.push_str("</style>\n");

    preview.push_str("<div class=\"preview-container\">\n");
    preview.push_str(&format!(
        "<h3>Preview (slide 1 of {})</h3>\n<hr>\n",
        presentation.slide_count()
    ));
    preview.push_str(&first.markup);
    preview.push_str("\n</div>");
    preview
}
