/// Character used to escape LIKE wildcards in prefix patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Builds a LIKE pattern matching every value that starts with `prefix`.
///
/// `%`, `_` and the escape character itself are escaped so they match literally.
/// The pattern must be used together with `LIKE_ESCAPE`.
pub fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
