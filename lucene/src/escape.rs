//! Escaping of literal values for Lucene query syntax.

/// Characters with meaning in the query grammar.
///
/// Lucene itself does not require `/` to be escaped, Cloudant does.
const RESERVED: &[char] = &[
    '\\', '/', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|',
    '&',
];

/// Escape a literal value so it can be embedded in a quoted query term.
///
/// Every reserved character is preceded by a backslash; everything else is
/// copied through unchanged.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
