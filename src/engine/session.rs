// per-session view state: query, suggestions, selection, carousel cursor

use super::index::SchoolIndex;
use super::suggest::suggest;

/// whether a session opens on a school or waits for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartMode {
    #[default]
    DefaultSelection,
    SearchFirst,
}

impl StartMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" | "selected" | "carousel" => Some(StartMode::DefaultSelection),
            "search" | "empty" => Some(StartMode::SearchFirst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    query: String,
    suggestions: Vec<String>,
    suggestions_open: bool,
    selected: Option<String>,
    cursor: usize,
}

impl Session {
    pub fn new(index: &SchoolIndex, mode: StartMode) -> Self {
        let selected = match mode {
            StartMode::DefaultSelection => index.get(0).map(str::to_string),
            StartMode::SearchFirst => None,
        };
        Self {
            selected,
            ..Self::default()
        }
    }

    /// replace the query and recompute suggestions against the full index
    pub fn set_query(&mut self, index: &SchoolIndex, query: &str) -> &[String] {
        self.query = query.to_string();
        self.suggestions = suggest(index.names(), query)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.suggestions_open = true;
        &self.suggestions
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// visible suggestions; empty once dismissed
    pub fn suggestions(&self) -> &[String] {
        if self.suggestions_open {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn dismiss(&mut self) {
        self.suggestions_open = false;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// select `name` as given; the carousel follows when the name is indexed
    pub fn select(&mut self, index: &SchoolIndex, name: &str) {
        if let Some(pos) = index.position(name) {
            self.cursor = pos;
        }
        self.selected = Some(name.to_string());
        self.suggestions_open = false;
    }

    /// select the current query verbatim; blank queries are ignored
    pub fn submit(&mut self, index: &SchoolIndex) -> Option<&str> {
        if self.query.trim().is_empty() {
            return None;
        }
        let query = self.query.clone();
        self.select(index, &query);
        self.selected()
    }

    pub fn next(&mut self, index: &SchoolIndex) -> Option<&str> {
        if index.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % index.len();
        self.select_cursor(index)
    }

    pub fn prev(&mut self, index: &SchoolIndex) -> Option<&str> {
        if index.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + index.len() - 1) % index.len();
        self.select_cursor(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn select_cursor(&mut self, index: &SchoolIndex) -> Option<&str> {
        self.selected = index.get(self.cursor).map(str::to_string);
        self.selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::index::build_index;

    fn index() -> SchoolIndex {
        build_index([vec![
            "Northwestern University Kellogg",
            "Harvard Business School",
            "Stanford Graduate School of Business",
        ]])
    }

    #[test]
    fn test_start_modes() {
        let index = index();
        assert_eq!(
            Session::new(&index, StartMode::DefaultSelection).selected(),
            Some("Northwestern University Kellogg")
        );
        assert_eq!(Session::new(&index, StartMode::SearchFirst).selected(), None);
        assert_eq!(
            Session::new(&SchoolIndex::default(), StartMode::DefaultSelection).selected(),
            None
        );
    }

    #[test]
    fn test_suggestions_follow_every_query() {
        let index = index();
        let mut session = Session::new(&index, StartMode::SearchFirst);

        session.set_query(&index, "s");
        assert_eq!(session.suggestions().len(), 3);
        session.set_query(&index, "st");
        assert_eq!(session.suggestions(), ["Stanford Graduate School of Business"]);
        session.set_query(&index, "");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_dismiss_hides_until_next_query() {
        let index = index();
        let mut session = Session::new(&index, StartMode::SearchFirst);
        session.set_query(&index, "harv");
        session.dismiss();
        assert!(session.suggestions().is_empty());
        assert_eq!(session.query(), "harv");

        session.set_query(&index, "harva");
        assert_eq!(session.suggestions(), ["Harvard Business School"]);
    }

    #[test]
    fn test_submit_selects_query_verbatim() {
        let index = index();
        let mut session = Session::new(&index, StartMode::SearchFirst);

        session.set_query(&index, "   ");
        assert_eq!(session.submit(&index), None);

        session.set_query(&index, "Unlisted School");
        assert_eq!(session.submit(&index), Some("Unlisted School"));
        assert_eq!(session.cursor(), 0);

        session.set_query(&index, "Harvard Business School");
        session.submit(&index);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_carousel_wraps() {
        let index = index();
        let mut session = Session::new(&index, StartMode::DefaultSelection);

        assert_eq!(session.prev(&index), Some("Stanford Graduate School of Business"));
        assert_eq!(session.next(&index), Some("Northwestern University Kellogg"));
        assert_eq!(session.next(&index), Some("Harvard Business School"));
    }

    #[test]
    fn test_carousel_on_empty_index() {
        let index = SchoolIndex::default();
        let mut session = Session::new(&index, StartMode::DefaultSelection);
        assert_eq!(session.next(&index), None);
        assert_eq!(session.prev(&index), None);
    }
}
