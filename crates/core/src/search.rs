//! Helpers for substring search over text columns.
//!
//! Queries use `LIKE ... ESCAPE '\'`, so every wildcard character in user input
//! has to be escaped before it is embedded in a pattern.

/// Escape character paired with the `ESCAPE` clause in repository queries.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so they match literally.
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `LIKE` pattern that matches any value containing `fragment`.
///
/// # Examples
///
/// ```
/// use cinedex_core::search::contains_pattern;
/// assert_eq!(contains_pattern("cep"), "%cep%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}
