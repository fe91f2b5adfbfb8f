use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Escapes `&`, `<`, `>`, `"` and `'` so the text is inert both in element
/// bodies and in quoted attributes.
pub fn escape(unsafe_text: &str) -> String {
    html_escape::encode_quoted_attribute(unsafe_text).into_owned()
}

/// Drops anything that looks like a tag. Applied to registration inputs.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}
