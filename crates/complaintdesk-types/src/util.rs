use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` the same as `null`.
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// True when the text is empty or consists only of whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Truncate to at most `max_chars` characters, respecting UTF-8 boundaries
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
