// ghost text hints: live school suggestions while typing a name

use nu_ansi_term::Style;
use reedline::{Hinter, History};
use std::sync::Arc;

use crate::data::Catalog;
use crate::engine::normalize::match_key;
use crate::engine::suggest;
use crate::theme;

use super::NAME_VERBS;

const STATIC_HINTS: &[(&str, &str)] = &[
    ("search", " <text>"),
    ("school", " <name>"),
    ("rankings", " [highest-national | lowest-national | ...]"),
    ("jobs", " [n]"),
    ("compare", " [gap | <name>]"),
    ("/config ", "edit | init | path"),
    ("/theme ", "catppuccin | basic | plain"),
];

pub struct MbaHinter {
    catalog: Arc<Catalog>,
    // plain remainder accepted by the right arrow
    current: String,
}

impl MbaHinter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current: String::new(),
        }
    }

    /// hint for the partial name typed after a name verb
    fn name_hint(&mut self, partial: &str) -> String {
        if partial.trim().is_empty() {
            return format!("{} schools", self.catalog.index.len());
        }

        let matches = suggest(self.catalog.index.names(), partial);
        let Some(first) = matches.first() else {
            return "  no schools found".to_string();
        };

        // complete inline when the first match extends what was typed
        let typed = match_key(partial);
        if match_key(first).starts_with(&typed) {
            let rest: String = first.chars().skip(partial.chars().count()).collect();
            self.current = rest.clone();
            if matches.len() > 1 {
                return format!("{}  (+{} more)", rest, matches.len() - 1);
            }
            return rest;
        }

        format!("  {} matches, first: {}", matches.len(), first)
    }
}

impl Hinter for MbaHinter {
    fn handle(
        &mut self,
        line: &str,
        _pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current.clear();

        let hint = if let Some((verb, partial)) = line.split_once(' ') {
            let partial = partial.trim_start();
            if NAME_VERBS.contains(&verb) && !(verb == "compare" && partial == "gap") {
                self.name_hint(partial)
            } else {
                static_hint(line)
            }
        } else {
            static_hint(line)
        };

        if hint.is_empty() || !use_ansi_coloring {
            return hint;
        }
        format!(
            "{}",
            Style::new().fg(theme::color_overlay0()).paint(hint)
        )
    }

    fn complete_hint(&self) -> String {
        self.current.clone()
    }

    fn next_hint_token(&self) -> String {
        // up to and including the next space
        match self.current.find(' ') {
            Some(i) if i > 0 => self.current[..i].to_string(),
            _ => self.current.clone(),
        }
    }
}

fn static_hint(line: &str) -> String {
    STATIC_HINTS
        .iter()
        .find(|(prefix, _)| line == *prefix)
        .map(|(_, suffix)| suffix.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DedupMode;

    fn hinter() -> MbaHinter {
        MbaHinter::new(Arc::new(Catalog::bundled(DedupMode::Exact)))
    }

    #[test]
    fn test_inline_completion_of_prefix() {
        let mut h = hinter();
        let hint = h.name_hint("Harv");
        assert_eq!(hint, "ard Business School");
        assert_eq!(h.complete_hint(), "ard Business School");
        assert_eq!(h.next_hint_token(), "ard");
    }

    #[test]
    fn test_substring_match_reports_count() {
        let mut h = hinter();
        let hint = h.name_hint("business");
        assert!(hint.contains("first: Harvard Business School"), "{hint}");
        assert!(h.complete_hint().is_empty());
    }

    #[test]
    fn test_extra_spaces_before_name() {
        let mut h = hinter();
        let line = "school  Harv";
        let history = reedline::FileBackedHistory::default();
        let hint = h.handle(line, line.len(), &history, false, "");
        assert_eq!(hint, "ard Business School");
        assert_eq!(h.complete_hint(), "ard Business School");
    }

    #[test]
    fn test_no_match() {
        let mut h = hinter();
        assert_eq!(h.name_hint("zzz"), "  no schools found");
    }
}
