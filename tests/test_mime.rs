use filegate::http::mime::{content_type, is_text, UNDEFINED};

#[test]
fn test_html_and_text() {
    assert_eq!(content_type("index.html"), "text/html");
    assert_eq!(content_type("notes/todo.txt"), "text/plain");
}

#[test]
fn test_binary_types() {
    assert_eq!(content_type("img/logo.png"), "image/png");
    assert_eq!(content_type("song.mp3"), "audio/mpeg");
}

#[test]
fn test_javascript() {
    assert_eq!(content_type("app.js"), "text/javascript");
    assert_eq!(content_type("scripts/lib.js"), "text/javascript");
}

#[test]
fn test_unknown_falls_back_to_undefined() {
    assert_eq!(content_type("Makefile"), UNDEFINED);
    assert_eq!(content_type("data.zzzunknown"), UNDEFINED);
}

#[test]
fn test_is_text() {
    assert!(is_text("text/plain"));
    assert!(is_text("text/html"));
    assert!(!is_text("image/png"));
    assert!(!is_text(UNDEFINED));
    assert!(!is_text("textual/thing"));
}
