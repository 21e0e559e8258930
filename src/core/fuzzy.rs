use strsim::normalized_levenshtein;

/// Matches below this score are never shown to the user.
pub const SCORE_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub title: String,
    pub score: u8,
}

/// Lowercased, deduplicated, alphabetically-joined word form, so word
/// order and repetition do not affect the score.
fn token_set(text: &str) -> String {
    let mut tokens: Vec<String> = text
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens.join(" ")
}

/// Similarity between two strings in 0..=100.
pub fn token_set_score(a: &str, b: &str) -> u8 {
    let similarity = normalized_levenshtein(&token_set(a), &token_set(b));
    (similarity * 100.0).round() as u8
}

/// Searches stored titles for a query. Case-insensitive substring matches
/// win outright and keep stored order; otherwise every title is scored and
/// those at or above [`SCORE_THRESHOLD`] are returned best-first. An empty
/// result means "not found" and is not an error.
pub fn search(query: &str, titles: &[String]) -> Vec<FuzzyMatch> {
    let query_lower = query.to_lowercase();

    let exact: Vec<FuzzyMatch> = titles
        .iter()
        .filter(|t| t.to_lowercase().contains(&query_lower))
        .map(|t| FuzzyMatch {
            title: t.clone(),
            score: 100,
        })
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let mut scored: Vec<FuzzyMatch> = titles
        .iter()
        .map(|t| FuzzyMatch {
            title: t.clone(),
            score: token_set_score(query, t),
        })
        .filter(|m| m.score >= SCORE_THRESHOLD)
        .collect();

    // Tie-break on title so output is deterministic.
    scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title)));
    scored
}
