// ABOUTME: HTML export module for the json-slides application
// ABOUTME: Serializes a rendered presentation into one self-contained document

use crate::config::ExportConfig;
use crate::errors::{Result, SlideError};
use crate::types::{RenderedPresentation, Theme};
use crate::utils::{self, escape_html};
use log::info;
use std::fs;
use std::path::Path;

/// Theme-dependent colours of the exported stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub container_background: &'static str,
    pub header_background: &'static str,
    pub header_border: &'static str,
    pub text: &'static str,
    pub slide_border: &'static str,
    pub heading: &'static str,
    pub heading_rule: &'static str,
    pub subtitle: &'static str,
    pub muted: &'static str,
    pub column_background: &'static str,
    pub note_rule: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        container_background: "white",
        header_background: "#f5f5f5",
        header_border: "#ddd",
        text: "#333",
        slide_border: "#eee",
        heading: "#2c3e50",
        heading_rule: "#3498db",
        subtitle: "#7f8c8d",
        muted: "#95a5a6",
        column_background: "#f9f9f9",
        note_rule: "#ccc",
    };

    pub const DARK: Palette = Palette {
        container_background: "#1a1a1a",
        header_background: "#2d2d2d",
        header_border: "#444",
        text: "#fff",
        slide_border: "#333",
        heading: "#fff",
        heading_rule: "#555",
        subtitle: "#ccc",
        muted: "#999",
        column_background: "#2d2d2d",
        note_rule: "#444",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

const NAVIGATION_SCRIPT: &str = r#"<script>
let currentSlide = 0;
const slides = document.querySelectorAll('.slide');
const indicator = document.getElementById('slide-indicator');

function showSlide(index) {
    slides.forEach((slide, i) => {
        slide.style.display = i === index ? 'block' : 'none';
    });
    currentSlide = index;
    if (indicator) {
        indicator.textContent = (index + 1) + ' / ' + slides.length;
    }
}

function navigateSlide(direction) {
    const next = currentSlide + direction;
    if (next >= 0 && next < slides.length) {
        showSlide(next);
    }
}

document.addEventListener('keydown', (e) => {
    if (e.key === 'ArrowRight') navigateSlide(1);
    if (e.key === 'ArrowLeft') navigateSlide(-1);
});

if (slides.length > 0) {
    showSlide(0);
}
</script>"#;

/// Turns a rendered presentation into a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: ExportConfig,
}

impl HtmlExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Build the full document. Infallible for any rendered presentation.
    pub fn export(&self, presentation: &RenderedPresentation) -> String {
        let metadata = &presentation.metadata;
        info!(
            "Exporting \"{}\" with {} slide(s)",
            metadata.title,
            presentation.slide_count()
        );

        let mut html_doc = String::from("<!DOCTYPE html>\n");
        html_doc.push_str(&format!(
            "<html lang=\"{}\">\n<head>\n",
            escape_html(&self.config.lang)
        ));
        html_doc.push_str("<meta charset=\"UTF-8\">\n");
        html_doc.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html_doc.push_str(&format!("<title>{}</title>\n", escape_html(&metadata.title)));

        html_doc.push_str("<style>\n");
        html_doc.push_str(&stylesheet(&Palette::for_theme(metadata.theme)));
        if !presentation.extra_styles.is_empty() {
            html_doc.push_str(&presentation.extra_styles);
            html_doc.push('\n');
        }
        html_doc.push_str("</style>\n</head>\n<body>\n");

        html_doc.push_str("<div class=\"presentation-container\">\n");
        html_doc.push_str(&format!(
            "<div class=\"presentation-metadata\"><strong>{}</strong> &bull; {} &bull; {}</div>\n",
            escape_html(&metadata.title),
            escape_html(&metadata.author),
            escape_html(&metadata.creation_date)
        ));

        for slide in &presentation.slides {
            html_doc.push_str(&format!(
                "<div class=\"slide\" id=\"slide-{}\">{}</div>\n",
                slide.id, slide.markup
            ));
        }
        html_doc.push_str("</div>\n");

        if self.config.navigation {
            html_doc.push_str("<div class=\"nav-controls\">\n");
            html_doc.push_str(
                "<button class=\"nav-btn\" onclick=\"navigateSlide(-1)\">&#9664; Previous</button>\n",
            );
            html_doc.push_str(&format!(
                "<span id=\"slide-indicator\">1 / {}</span>\n",
                presentation.slide_count()
            ));
            html_doc.push_str(
                "<button class=\"nav-btn\" onclick=\"navigateSlide(1)\">Next &#9654;</button>\n",
            );
            html_doc.push_str("</div>\n");
            html_doc.push_str(NAVIGATION_SCRIPT);
            html_doc.push('\n');
        }

        html_doc.push_str("</body>\n</html>");
        html_doc
    }
}

fn stylesheet(palette: &Palette) -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: Arial, sans-serif; background: #333; display: flex; flex-direction: column; align-items: center; padding: 20px; }}
.presentation-container {{ max-width: 1200px; width: 100%; background: {container}; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.3); overflow: hidden; }}
.presentation-metadata {{ padding: 15px 20px; background: {header}; color: {text}; border-bottom: 2px solid {header_border}; font-size: 0.9em; }}
.slide {{ padding: 40px; min-height: 500px; border-bottom: 1px solid {slide_border}; color: {text}; }}
.slide:last-child {{ border-bottom: none; }}
.slide-title {{ font-size: 2.5em; margin-bottom: 30px; color: {heading}; border-bottom: 2px solid {heading_rule}; padding-bottom: 10px; }}
.bullet-list {{ list-style-type: disc; margin-left: 30px; line-height: 1.8; font-size: 1.2em; }}
.title-slide {{ display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 500px; text-align: center; }}
.title-slide-title {{ font-size: 3.5em; margin-bottom: 20px; color: {heading}; }}
.title-slide-subtitle {{ font-size: 2em; margin-bottom: 30px; color: {subtitle}; font-weight: normal; }}
.title-slide-date {{ font-size: 1.2em; color: {muted}; }}
.columns {{ display: grid; grid-template-columns: 1fr 1fr; gap: 40px; margin-top: 20px; }}
.column {{ background: {column}; padding: 25px; border-radius: 8px; border-left: 4px solid #3498db; }}
.column-heading {{ font-size: 1.5em; margin-bottom: 15px; color: #3498db; }}
.slide-note {{ margin-top: 30px; padding-top: 15px; border-top: 1px dashed {note_rule}; font-style: italic; color: {muted}; font-size: 0.9em; }}
.nav-controls {{ position: fixed; bottom: 20px; right: 20px; background: {container}; color: {text}; padding: 10px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.3); display: flex; gap: 10px; align-items: center; }}
.nav-btn {{ padding: 8px 15px; background: #3498db; color: white; border: none; border-radius: 4px; cursor: pointer; }}
.nav-btn:hover {{ background: #2980b9; }}
"#,
        container = palette.container_background,
        header = palette.header_background,
        header_border = palette.header_border,
        text = palette.text,
        slide_border = palette.slide_border,
        heading = palette.heading,
        heading_rule = palette.heading_rule,
        subtitle = palette.subtitle,
        muted = palette.muted,
        column = palette.column_background,
        note_rule = palette.note_rule,
    )
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    utils::ensure_parent_directory_exists(output_path)?;
    fs::write(output_path, html_content).map_err(SlideError::FileReadError)?;

    Ok(())
}
