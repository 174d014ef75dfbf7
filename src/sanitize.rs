use std::collections::HashSet;

/// Strips every markup tag from caller-supplied text and trims the result.
/// Script and style bodies are dropped entirely, everything else keeps its
/// text content. Runs before validation and before any comparison against
/// stored values, so the stored form and the compared form always match.
pub fn strip_markup(input: &str) -> String {
    ammonia::Builder::default()
        .tags(HashSet::new())
        .clean(input)
        .to_string()
        .trim()
        .to_string()
}
