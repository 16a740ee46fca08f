use std::path::Path;

/// Returned when no content type can be determined.
pub const UNDEFINED: &str = "data/undefined";

/// Infers a MIME type from the path's extension.
///
/// Falls back to `text/javascript` for `.js` files the lookup does not know,
/// then to [`UNDEFINED`].
pub fn content_type(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    resolve(path, mime_guess::from_path(path).first())
}

/// Applies the fallbacks to the result of an extension lookup.
fn resolve(path: &Path, guessed: Option<mime_guess::Mime>) -> String {
    if let Some(mime) = guessed {
        return mime.essence_str().to_string();
    }

    // Lookup tables that predate the text/javascript registration miss `.js`
    if path.extension().is_some_and(|ext| ext == "js") {
        return "text/javascript".to_string();
    }

    UNDEFINED.to_string()
}

/// True when the primary type is `text`.
pub fn is_text(content_type: &str) -> bool {
    content_type.split('/').next() == Some("text")
}
