// tab completion: school names after a name verb, fuzzy slash commands otherwise

use reedline::{Completer, Span, Suggestion};
use std::sync::Arc;

use crate::data::Catalog;
use crate::engine::suggest;

use super::{fuzzy, NAME_VERBS, VERBS};

const SLASH_COMMANDS: &[&str] = &[
    "/help",
    "/config",
    "/config edit",
    "/config init",
    "/config path",
    "/data",
    "/method",
    "/theme",
    "/theme catppuccin",
    "/theme basic",
    "/theme plain",
    "/clear",
    "/quit",
];

pub struct MbaCompleter {
    catalog: Arc<Catalog>,
}

impl MbaCompleter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Completer for MbaCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_cursor = &line[..pos];

        if line_to_cursor.starts_with('/') {
            return complete_slash(line_to_cursor);
        }

        if let Some((verb, partial)) = line_to_cursor.split_once(' ') {
            // arguments are trimmed before running, so skip leading spaces here too
            let trimmed = partial.trim_start();
            let start = verb.len() + 1 + (partial.len() - trimmed.len());
            if NAME_VERBS.contains(&verb) {
                return complete_school(&self.catalog, trimmed, start, pos);
            }
            if verb == "rankings" {
                return complete_sort(trimmed, start, pos);
            }
            return Vec::new();
        }

        complete_verbs(line_to_cursor)
    }
}

fn suggestion(value: String, description: Option<String>, span: Span) -> Suggestion {
    Suggestion {
        value,
        description,
        style: None,
        extra: None,
        span,
        append_whitespace: false,
    }
}

fn complete_slash(prefix: &str) -> Vec<Suggestion> {
    fuzzy::search_commands(prefix, SLASH_COMMANDS)
        .into_iter()
        .map(|cmd| suggestion(cmd.to_string(), None, Span::new(0, prefix.len())))
        .collect()
}

fn complete_verbs(prefix: &str) -> Vec<Suggestion> {
    VERBS
        .iter()
        .filter(|verb| verb.starts_with(prefix))
        .map(|verb| {
            let mut s = suggestion(verb.to_string(), None, Span::new(0, prefix.len()));
            s.append_whitespace = NAME_VERBS.contains(verb) || *verb == "rankings";
            s
        })
        .collect()
}

fn complete_school(catalog: &Catalog, partial: &str, start: usize, end: usize) -> Vec<Suggestion> {
    // an empty partial offers the whole index
    let names: Vec<&str> = if partial.trim().is_empty() {
        catalog.index.names().iter().map(String::as_str).collect()
    } else {
        suggest(catalog.index.names(), partial)
    };

    names
        .into_iter()
        .map(|name| {
            let description = if catalog.schools.iter().any(|s| s.name == name) {
                None
            } else {
                Some("no curriculum".to_string())
            };
            suggestion(name.to_string(), description, Span::new(start, end))
        })
        .collect()
}

fn complete_sort(partial: &str, start: usize, end: usize) -> Vec<Suggestion> {
    use crate::engine::rankings::SortField;

    SortField::ALL
        .iter()
        .flat_map(|field| {
            [
                format!("highest-{}", field.as_str()),
                format!("lowest-{}", field.as_str()),
            ]
        })
        .filter(|key| key.starts_with(partial))
        .map(|key| suggestion(key, None, Span::new(start, end)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DedupMode;

    fn completer() -> MbaCompleter {
        MbaCompleter::new(Arc::new(Catalog::bundled(DedupMode::Exact)))
    }

    #[test]
    fn test_completes_school_names_after_verb() {
        let line = "school harv";
        let found = completer().complete(line, line.len());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "Harvard Business School");
        assert_eq!(found[0].span, Span::new(7, line.len()));
    }

    #[test]
    fn test_extra_spaces_before_name() {
        let line = "school   harv";
        let found = completer().complete(line, line.len());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "Harvard Business School");
        assert_eq!(found[0].span, Span::new(9, line.len()));

        let line = "rankings  lowest-s";
        let found = completer().complete(line, line.len());
        assert_eq!(found[0].value, "lowest-strategy");
        assert_eq!(found[0].span, Span::new(10, line.len()));
    }

    #[test]
    fn test_completes_verbs() {
        let found = completer().complete("ra", 2);
        let values: Vec<&str> = found.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["rankings"]);
    }

    #[test]
    fn test_completes_sort_keys() {
        let line = "rankings lowest-s";
        let found = completer().complete(line, line.len());
        let values: Vec<&str> = found.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["lowest-strategy"]);
    }
}
