use json_slides::{ErrorCode, ProcessResponse, SlideApp, SlideError};

const HEADER: &str =
    r#""metadata":{"title":"T","author":"A","creationDate":"2024-01-01","theme":"light"}"#;

fn manifest(slides: &str) -> String {
    format!("{{{},\"slides\":{}}}", HEADER, slides)
}

#[test]
fn test_misnamed_required_field_is_invalid_content() {
    let input = manifest(r#"[{"id":1,"content":{"type":"titleSlide","data":{"titulo":"Hello"}}}]"#);
    let mut app = SlideApp::new();

    match app.process(&input) {
        Err(SlideError::InvalidContent { slide_id, source }) => {
            assert_eq!(slide_id, 1);
            assert!(source.to_string().contains("title"));
        }
        other => panic!("expected invalid content, got {:?}", other),
    }
    assert!(app.last_presentation().is_none());
}

#[test]
fn test_title_slide_preview() {
    let input = manifest(r#"[{"id":1,"content":{"type":"titleSlide","data":{"title":"Hello"}}}]"#);
    let mut app = SlideApp::new();

    let preview = app.process(&input).expect("manifest should render");
    assert!(preview.contains("<h1 class=\"title-slide-title\">Hello</h1>"));
    assert!(preview.contains("slide 1 of 1"));
}

#[test]
fn test_empty_slide_list() {
    let mut app = SlideApp::new();

    let preview = app.process(&manifest("[]")).expect("empty deck is valid");
    assert_eq!(preview, "<div class=\"error\">No slides to display</div>");

    let document = app.export_full().expect("export should succeed");
    assert!(document.contains("<title>T</title>"));
    assert_eq!(document.matches("<div class=\"slide\"").count(), 0);
    assert!(document.contains("1 / 0"));
}

#[test]
fn test_malformed_json() {
    let mut app = SlideApp::new();
    let result = app.process("{not json");

    assert!(matches!(result, Err(SlideError::MalformedInput(_))));
    let response = ProcessResponse::from(result);
    assert!(!response.success);
    assert!(response.preview.is_none());
    assert_eq!(response.code, Some(ErrorCode::InvalidJson));
}

#[test]
fn test_unregistered_layout_names_slide() {
    let input = manifest(
        r#"[
            {"id":1,"content":{"type":"titleSlide","data":{"title":"Fine"}}},
            {"id":42,"content":{"type":"triColumn","data":{}}}
        ]"#,
    );
    let mut app = SlideApp::new();

    let err = app.process(&input).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownLayout);
    assert_eq!(err.slide_id(), Some(42));
    assert!(err.to_string().contains("triColumn"));
}

#[test]
fn test_export_before_process() {
    let app = SlideApp::new();
    let err = app.export_full().unwrap_err();

    assert!(matches!(err, SlideError::NoPresentationAvailable));
    assert_eq!(err.code(), ErrorCode::NoPresentation);
}

#[test]
fn test_full_deck_round_trip() {
    let input = manifest(
        r#"[
            {"id":1,"content":{"type":"titleSlide","data":{"title":"Roadmap","subtitle":"2025","date":"Jan"}}},
            {"id":2,"content":{"type":"singleColumn","data":{"title":"Goals","bullets":["Ship","Learn"],"note":"Draft"}}},
            {"id":3,"content":{"type":"twoColumn","data":{"title":"Trade-offs","left":{"heading":"Now","bullets":["Speed"]},"right":{"heading":"Later","bullets":["Scale"]}}}}
        ]"#,
    );
    let mut app = SlideApp::new();

    let preview = app.process(&input).unwrap();
    assert!(preview.contains("slide 1 of 3"));
    assert!(preview.contains("Roadmap"));
    assert!(!preview.contains("Goals"));

    let document = app.export_full().unwrap();
    for id in 1..=3 {
        assert!(document.contains(&format!("id=\"slide-{}\"", id)));
    }
    assert!(document.contains("<p class=\"slide-note\">Draft</p>"));
    assert!(document.contains("<h3 class=\"column-heading\">Later</h3>"));
    assert!(document.contains("1 / 3"));
}

#[test]
fn test_successful_process_replaces_stored_presentation() {
    let mut app = SlideApp::new();
    app.process(&manifest(
        r#"[{"id":1,"content":{"type":"titleSlide","data":{"title":"Old"}}}]"#,
    ))
    .unwrap();
    app.process(&manifest(
        r#"[{"id":1,"content":{"type":"titleSlide","data":{"title":"New"}}}]"#,
    ))
    .unwrap();

    let document = app.export_full().unwrap();
    assert!(document.contains("New"));
    assert!(!document.contains("Old"));
}
