/// Marker appended to a truncated preview.
pub const ELLIPSIS: &str = "...";

/// Collapses every whitespace run (spaces, tabs, newlines) into a single
/// space and trims both ends.
///
/// The ASCII separator controls `\x1c`..=`\x1f` count as whitespace too.
pub fn clean_text(text: &str) -> String {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Returns the first `max_chars` characters followed by [`ELLIPSIS`] when the
/// text is longer than `max_chars`, otherwise the text unchanged.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}
