//! Prompt templates.

/// Token budget for query expansion.
pub const EXPAND_MAX_TOKENS: u32 = 256;

/// Token budget for punchline rewriting.
pub const PUNCHLINE_MAX_TOKENS: u32 = 1024;

/// Ask for subtitle-style search phrases for a scenario.
pub fn expand_queries_prompt(scenario: &str) -> String {
    format!(
        r#"You are a Simpsons expert helping search Frinkiac, a subtitle database for every Simpsons episode.

User scenario: "{scenario}"

Generate 4 short search queries (2–5 words each) that will find the best matching Simpsons scenes in the subtitle database.

Think about:
- What exact words or dialogue would appear in the actual subtitles of the matching scene?
- Do you recognise a specific famous scene? If so, use the character's real dialogue from that scene.
- Character names + specific phrases work better than descriptive terms.
- Subtitles are written in plain spoken English.

Return ONLY a JSON array of strings, nothing else.
Example: ["homer forbidden donut", "mmm donuts", "is there anything", "17 donuts"]"#
    )
}

/// Ask for one punchline per caption, same order and length.
pub fn punchlines_prompt(scenario: &str, captions: &[String], max_chars: usize) -> String {
    let numbered: String = captions
        .iter()
        .enumerate()
        .map(|(i, caption)| {
            let caption = if caption.is_empty() { "(no caption)" } else { caption.as_str() };
            format!("{}. {}\n", i + 1, caption)
        })
        .collect();

    format!(
        r#"You are picking meme captions for Simpsons screenshots.

User scenario: "{scenario}"

Below are {count} raw subtitle excerpts, one per screenshot, in order:
{numbered}
For each excerpt, return the single funniest standalone quote from it that fits the scenario.
Rules:
- Use only words that appear in that excerpt; trim setup lines if the punchline stands alone.
- Each quote must be at most {max_chars} characters.
- Use an empty string "" when an excerpt has no usable quote.

Return ONLY a JSON array of exactly {count} strings, in the same order, nothing else."#,
        count = captions.len(),
    )
}
