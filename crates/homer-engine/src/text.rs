//! Subtitle text normalization and overlay layout.
//!
//! All widths and caps are counted in characters, not bytes.

use homer_models::CaptionSet;

/// Characters per overlay line; wider lines clip on the rendered image.
pub const WRAP_WIDTH: usize = 26;

/// Quotes wrapping past this many lines overflow the frame.
pub const MAX_OVERLAY_LINES: usize = 4;

/// Cap on a composite quote.
pub const MAX_QUOTE_CHARS: usize = 130;

/// Appended when a quote was cut.
pub const ELLIPSIS: &str = "...";

/// Collapse whitespace runs to single spaces, trim, and upper-case.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Greedily pack words onto lines of at most `max_width` characters.
///
/// A word longer than `max_width` sits alone on its own line and is never
/// split. Lines are joined with `\n`.
pub fn wrap(text: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Number of lines `text` occupies once wrapped at `WRAP_WIDTH`.
pub fn overlay_lines(text: &str) -> usize {
    let wrapped = wrap(text, WRAP_WIDTH);
    if wrapped.is_empty() {
        0
    } else {
        wrapped.lines().count()
    }
}

/// Whether a quote can be drawn on a frame without overflowing.
pub fn fits_overlay(text: &str) -> bool {
    overlay_lines(text) <= MAX_OVERLAY_LINES
}

/// Cut `text` to at most `max_chars`, backing up to the last word boundary
/// and appending `...` when anything was removed.
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let prefix: String = text.chars().take(keep).collect();
    let cut = match prefix.rfind(' ') {
        Some(i) if i > 0 => &prefix[..i],
        _ => prefix.as_str(),
    };

    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Build one composite quote from every subtitle line in a caption set.
///
/// Lines are ordered by start offset so setup and punchline read in
/// sequence. Returns an empty string when there are no subtitles.
pub fn pick_quote(caption: &CaptionSet) -> String {
    if caption.subtitles.is_empty() {
        return String::new();
    }

    let mut subtitles: Vec<_> = caption.subtitles.iter().collect();
    subtitles.sort_by_key(|s| s.start_timestamp);

    let joined = subtitles
        .iter()
        .map(|s| s.content.trim())
        .collect::<Vec<_>>()
        .join(" ");

    truncate_words(&normalize(&joined), MAX_QUOTE_CHARS)
}
