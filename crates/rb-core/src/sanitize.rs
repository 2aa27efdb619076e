//! HTML escaping for user-supplied text.

/// Escapes `&`, `<`, `>`, `"` and `'` so the result is inert when dropped
/// into HTML text or a quoted attribute.
pub fn sanitize(raw: &str) -> String {
    html_escape::encode_quoted_attribute(raw).into_owned()
}
