/// All database primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Parse an identifier taken from a URL path segment.
///
/// Returns `None` for anything that is not a plain decimal integer; such a
/// segment cannot name a stored row.
pub fn parse_db_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(parse_db_id("1"), Some(1));
        assert_eq!(parse_db_id("-3"), Some(-3));
    }

    #[test]
    fn rejects_non_integer_text() {
        assert_eq!(parse_db_id("abc"), None);
        assert_eq!(parse_db_id("1.0"), None);
        assert_eq!(parse_db_id(""), None);
        assert_eq!(parse_db_id("99999999999999999999"), None);
    }
}
