//! XML text escaping for caller-supplied strings.
//!
//! The writer passes text through untouched unless
//! [`DocumentOptions::escape_text`](crate::DocumentOptions::escape_text) is
//! turned on. With it on, title and description go through [`escape_text`].

/// Escape text for use in element content or a double-quoted attribute.
///
/// - `<`, `>` and `"` are always escaped
/// - `&` that starts an entity (`&amp;`, `&#169;`, `&rarr;`) is kept as is
/// - any other `&` becomes `&amp;`
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, c) in s.char_indices() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '&' if is_entity_at(s.as_bytes(), i) => result.push('&'),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }

    result
}

/// Check if position i in bytes starts an entity reference.
/// Matches: &[#]?[a-zA-Z0-9]+;
fn is_entity_at(bytes: &[u8], i: usize) -> bool {
    if i >= bytes.len() || bytes[i] != b'&' {
        return false;
    }

    let mut j = i + 1;
    if j < bytes.len() && bytes[j] == b'#' {
        j += 1;
    }

    let start = j;
    while j < bytes.len() {
        let c = bytes[j];
        if c == b';' {
            return j > start;
        } else if c.is_ascii_alphanumeric() {
            j += 1;
        } else {
            return false;
        }
    }

    false
}
