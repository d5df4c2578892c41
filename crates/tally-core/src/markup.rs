//! Removal of wiki-style `[[...]]` and `{{...}}` spans.
//!
//! A span opens at the delimiter, holds at least one character, and closes at
//! the next closing delimiter on the same line. An opener without such a
//! closer is not a span and stays in the text.

pub const BRACKETS: (&str, &str) = ("[[", "]]");
pub const BRACES: (&str, &str) = ("{{", "}}");

/// Replace every `open ... close` span (shortest match) with a single space
pub fn strip_delimited(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let body = &rest[start + open.len()..];

        match span_end(body, close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push(' ');
                rest = &body[end..];
            }
            None => {
                // Not a span here; the next candidate may start one char later ("[[[")
                let skip = start + open.chars().next().map_or(1, char::len_utf8);
                out.push_str(&rest[..skip]);
                rest = &rest[skip..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Byte offset in `body` just past the closing delimiter
fn span_end(body: &str, close: &str) -> Option<usize> {
    let first = body.chars().next()?;
    if first == '\n' {
        return None;
    }

    let from = first.len_utf8();
    let at = from + body[from..].find(close)?;
    if body[..at].contains('\n') {
        return None;
    }

    Some(at + close.len())
}

/// Strip bracket spans, then brace spans
pub fn strip_markup(text: &str) -> String {
    let without_brackets = strip_delimited(text, BRACKETS.0, BRACKETS.1);
    strip_delimited(&without_brackets, BRACES.0, BRACES.1)
}
