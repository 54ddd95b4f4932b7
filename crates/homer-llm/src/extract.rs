//! Pull a JSON string array out of free-form model output.
//!
//! Models wrap answers in prose or markdown fences often enough that the
//! response body can't be parsed directly.

use serde_json::Value;

/// Find the first bracketed span that parses as a JSON array of strings.
///
/// Every `[` is tried as a start, and for each start every later `]` as an
/// end, shortest first. Non-string elements disqualify a candidate.
pub fn extract_string_array(text: &str) -> Option<Vec<String>> {
    let opens: Vec<usize> = text.match_indices('[').map(|(i, _)| i).collect();
    let closes: Vec<usize> = text.match_indices(']').map(|(i, _)| i).collect();

    for &start in &opens {
        for &end in closes.iter().filter(|&&end| end > start) {
            let candidate = &text[start..=end];
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(candidate) {
                let strings: Option<Vec<String>> = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect();
                if strings.is_some() {
                    return strings;
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_array() {
        assert_eq!(
            extract_string_array(r#"["mmm donuts", "d'oh"]"#),
            Some(vec!["mmm donuts".to_string(), "d'oh".to_string()])
        );
    }

    #[test]
    fn test_array_in_prose_and_fences() {
        let text = "Sure! Here you go:\n```json\n[\"homer forbidden donut\", \"17 donuts\"]\n```\nEnjoy.";
        assert_eq!(
            extract_string_array(text),
            Some(vec!["homer forbidden donut".to_string(), "17 donuts".to_string()])
        );
    }

    #[test]
    fn test_bracket_inside_string() {
        assert_eq!(
            extract_string_array(r#"["[sic] worst. episode. ever.", "x"]"#),
            Some(vec!["[sic] worst. episode. ever.".to_string(), "x".to_string()])
        );
    }

    #[test]
    fn test_skips_non_string_arrays() {
        let text = r#"Scores [1, 2, 3] then ["a", "b"]"#;
        assert_eq!(
            extract_string_array(text),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_empty_array_is_found() {
        assert_eq!(extract_string_array("[]"), Some(vec![]));
    }

    #[test]
    fn test_no_array() {
        assert_eq!(extract_string_array("I can't help with that."), None);
        assert_eq!(extract_string_array("[unterminated"), None);
    }
}
