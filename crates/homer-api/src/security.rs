//! Input validation and sanitization for query parameters and bodies.

/// Longest scenario accepted, in characters.
pub const MAX_SCENARIO_LENGTH: usize = 500;

/// Most captions accepted by `/api/bestquote` in one request.
pub const MAX_CAPTIONS: usize = 24;

/// Longest single caption accepted, in characters.
pub const MAX_CAPTION_LENGTH: usize = 1000;

/// Strip control characters, collapse whitespace and cap the length.
pub fn sanitize_scenario(input: &str) -> String {
    sanitize_text(input, MAX_SCENARIO_LENGTH)
}

/// Same treatment as scenarios, with the caption length cap.
pub fn sanitize_caption(input: &str) -> String {
    sanitize_text(input, MAX_CAPTION_LENGTH)
}

fn sanitize_text(input: &str, max_chars: usize) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Validate an episode key such as `S05E10`.
///
/// Alphanumeric only, 1-16 chars.
pub fn is_valid_episode_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 16 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse a non-negative millisecond timestamp.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|t| *t >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_scenario() {
        assert_eq!(sanitize_scenario("  my boss\n\twalks in\u{0007} "), "my boss walks in");
        assert_eq!(sanitize_scenario(""), "");

        let long = "d'oh ".repeat(200);
        assert!(sanitize_scenario(&long).chars().count() <= MAX_SCENARIO_LENGTH);
    }

    #[test]
    fn test_episode_id_validation() {
        assert!(is_valid_episode_id("S05E10"));
        assert!(!is_valid_episode_id(""));
        assert!(!is_valid_episode_id("S05E10/../x"));
        assert!(!is_valid_episode_id("S05 E10"));
        assert!(!is_valid_episode_id(&"S".repeat(17)));
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("461210"), Some(461210));
        assert_eq!(parse_timestamp(" 0 "), Some(0));
        assert_eq!(parse_timestamp("-5"), None);
        assert_eq!(parse_timestamp("soon"), None);
    }
}
