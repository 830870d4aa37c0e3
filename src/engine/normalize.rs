// canonical forms of school names

/// replace formatting artifacts (`_`) with spaces; no trimming, no case folding
pub fn normalize(name: &str) -> String {
    name.replace('_', " ")
}

/// form used for case-insensitive comparison
pub fn match_key(name: &str) -> String {
    normalize(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_spaces() {
        assert_eq!(normalize("Harvard_Business_School"), "Harvard Business School");
    }

    #[test]
    fn test_keeps_case_and_outer_whitespace() {
        assert_eq!(normalize(" MIT__Sloan "), " MIT  Sloan ");
    }

    #[test]
    fn test_idempotent() {
        for name in ["", "_", "a_b_c", "Wharton School (UPenn)", "__x__", "Ünï_cødé"] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_match_key_collapses_artifacts_and_case() {
        assert_eq!(
            match_key("Harvard_Business_School"),
            match_key("harvard business school")
        );
    }
}
