// fuzzy matching for slash commands

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// rank `candidates` against `pattern`, best first; ties keep alphabetical order
pub fn search_commands<'a>(pattern: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    if pattern.is_empty() {
        return candidates.to_vec();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pat = Pattern::parse(pattern, CaseMatching::Ignore, Normalization::Smart);

    let mut matches: Vec<(u32, &str)> = candidates
        .iter()
        .filter_map(|cmd| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(cmd, &mut buf);
            pat.score(haystack, &mut matcher).map(|score| (score, *cmd))
        })
        .collect();

    matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    matches.into_iter().map(|(_, cmd)| cmd).collect()
}
