/// Returns the trimmed text between the first `start` marker and the next
/// `end` marker after it, or up to the end of `text` when `end` does not
/// occur. A missing `start` marker yields an empty string.
pub fn extract<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(idx) = text.find(start) else {
        return "";
    };
    let rest = &text[idx + start.len()..];
    match rest.find(end) {
        Some(stop) => rest[..stop].trim(),
        None => rest.trim(),
    }
}
