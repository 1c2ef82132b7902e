//! Line splitting for manifest and reference files.

/// Separators between manifest tokens.
pub const MANIFEST_SEPARATORS: &str = " \t\r\n";

/// Split `line` into non-empty tokens separated by any character of
/// `separators`.
///
/// Runs of separators count as one. When `max_tokens` is non-zero, the
/// `max_tokens`-th token is the rest of the line verbatim, starting at that
/// token, so a trailing path containing spaces stays in one piece.
///
/// # Examples
///
/// ```
/// use cslmatch::manifest::{tokenize, MANIFEST_SEPARATORS};
///
/// assert_eq!(
///     tokenize("OBJ8  SOLID\tYES pkg/a.obj", MANIFEST_SEPARATORS, 0),
///     vec!["OBJ8", "SOLID", "YES", "pkg/a.obj"]
/// );
/// assert_eq!(
///     tokenize("OBJECT pkg/My Plane/a.obj", MANIFEST_SEPARATORS, 2),
///     vec!["OBJECT", "pkg/My Plane/a.obj"]
/// );
/// ```
pub fn tokenize<'a>(line: &'a str, separators: &str, max_tokens: usize) -> Vec<&'a str> {
    let is_separator = |c: char| separators.contains(c);
    let mut tokens = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start_matches(is_separator);
        if rest.is_empty() {
            break;
        }
        if max_tokens != 0 && tokens.len() + 1 == max_tokens {
            tokens.push(rest);
            break;
        }
        let end = rest.find(is_separator).unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = &rest[end..];
    }

    tokens
}

/// Split file content into lines.
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings.
pub fn manifest_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
