// incremental suggestions: case-insensitive containment over the whole index

use super::normalize::match_key;

/// names containing `query` after normalization, in index order.
/// an empty query yields nothing rather than the whole index.
pub fn suggest<'a, S: AsRef<str>>(index: &'a [S], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = match_key(query);
    let matches: Vec<&str> = index
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| match_key(name).contains(&needle))
        .collect();

    tracing::debug!(query, matches = matches.len(), "suggest");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::normalize;

    const INDEX: &[&str] = &[
        "Northwestern University Kellogg",
        "Harvard Business School",
        "Stanford Graduate School of Business",
        "MIT Sloan School of Management",
        "Wharton School (UPenn)",
    ];

    #[test]
    fn test_empty_query_is_empty() {
        assert!(suggest(INDEX, "").is_empty());
    }

    #[test]
    fn test_substring_not_prefix() {
        assert_eq!(suggest(INDEX, "sloan"), vec!["MIT Sloan School of Management"]);
        assert_eq!(
            suggest(INDEX, "business"),
            vec!["Harvard Business School", "Stanford Graduate School of Business"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(suggest(INDEX, "HARVARD"), suggest(INDEX, "harvard"));
        assert_eq!(suggest(INDEX, "HARVARD"), vec!["Harvard Business School"]);
    }

    #[test]
    fn test_stable_index_order() {
        let hits = suggest(INDEX, "school");
        assert_eq!(
            hits,
            vec![
                "Harvard Business School",
                "Stanford Graduate School of Business",
                "MIT Sloan School of Management",
                "Wharton School (UPenn)",
            ]
        );
    }

    #[test]
    fn test_underscores_match_spaces_both_ways() {
        let index = ["Harvard_Business_School"];
        assert_eq!(suggest(&index, "harvard business"), vec!["Harvard_Business_School"]);
        assert_eq!(suggest(INDEX, "harvard_business"), vec!["Harvard Business School"]);
    }

    #[test]
    fn test_not_fuzzy() {
        assert!(suggest(INDEX, "hrvrd").is_empty());
    }

    #[test]
    fn test_every_substring_of_a_name_finds_it() {
        for name in INDEX {
            let norm = normalize(name);
            let chars: Vec<char> = norm.chars().collect();
            for start in 0..chars.len() {
                for end in start + 1..=chars.len() {
                    let s: String = chars[start..end].iter().collect();
                    assert!(
                        suggest(INDEX, &s).contains(name),
                        "{s:?} did not find {name:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_works_with_owned_names() {
        let index = vec!["MIT Sloan".to_string(), "Kellogg".to_string()];
        assert_eq!(suggest(&index, "kell"), vec!["Kellogg"]);
    }
}
