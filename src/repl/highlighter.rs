// syntax highlighting for the REPL

use nu_ansi_term::Style;
use reedline::{Highlighter, StyledText};
use std::sync::Arc;

use crate::data::Catalog;
use crate::theme;

use super::{NAME_VERBS, VERBS};

pub struct MbaHighlighter {
    catalog: Arc<Catalog>,
}

impl MbaHighlighter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Highlighter for MbaHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        if line.starts_with('/') {
            highlight_slash_command(line, &mut styled);
            return styled;
        }

        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line, None),
        };

        if !VERBS.contains(&verb) {
            styled.push((Style::new().fg(theme::color_text()), line.to_string()));
            return styled;
        }

        styled.push((Style::new().fg(theme::color_mauve()), verb.to_string()));
        if let Some(rest) = rest {
            styled.push((Style::new().fg(theme::color_text()), " ".to_string()));
            // a name that is in the index shows teal, anything else stays plain
            let color = if NAME_VERBS.contains(&verb)
                && self.catalog.index.position(rest.trim()).is_some()
            {
                theme::color_teal()
            } else if NAME_VERBS.contains(&verb) {
                theme::color_text()
            } else {
                theme::color_peach()
            };
            styled.push((Style::new().fg(color), rest.to_string()));
        }
        styled
    }
}

fn highlight_slash_command(line: &str, styled: &mut StyledText) {
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

    styled.push((Style::new().fg(theme::color_sapphire()), cmd.to_string()));

    if !rest.is_empty() || line.ends_with(' ') {
        styled.push((Style::new().fg(theme::color_text()), " ".to_string()));
        styled.push((Style::new().fg(theme::color_teal()), rest.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DedupMode;

    #[test]
    fn test_highlight_keeps_text() {
        let h = MbaHighlighter::new(Arc::new(Catalog::bundled(DedupMode::Exact)));
        for line in ["school Harvard Business School", "/config edit", "rankings  lowest-national", "hello"] {
            let styled = h.highlight(line, line.len());
            let joined: String = styled.buffer.iter().map(|(_, s)| s.as_str()).collect();
            assert_eq!(joined, line);
        }
    }
}
