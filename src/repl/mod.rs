// REPL (Read-Eval-Print Loop) for interactive mbaindex sessions

mod commands;
mod completer;
mod fuzzy;
mod highlighter;
mod hinter;
mod picker;
mod prompt;
mod welcome;

use anyhow::Result;
use reedline::{FileBackedHistory, Reedline, Signal, Vi};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::data::Catalog;
use crate::engine::{Session, SortKey};
use completer::MbaCompleter;
use highlighter::MbaHighlighter;
use hinter::MbaHinter;
use prompt::MbaPrompt;

/// verbs that operate on the catalog
pub(crate) const VERBS: &[&str] = &[
    "search", "school", "next", "prev", "courses", "rankings", "jobs", "compare",
];

/// verbs whose argument is a school name
pub(crate) const NAME_VERBS: &[&str] = &["search", "school", "compare"];

/// per-session state; the catalog itself is shared read-only
pub struct ReplState {
    pub catalog: Arc<Catalog>,
    pub session: Session,
    pub config: Config,
    pub sort: SortKey,
}

/// run the interactive REPL
pub fn run(catalog: Catalog, config: Config) -> Result<()> {
    let session = crate::start_session(&catalog, &config);
    let mut state = ReplState {
        catalog: Arc::new(catalog),
        session,
        sort: config.sort_key(),
        config,
    };

    welcome::print_welcome(&state);

    let mut editor = create_editor(&state.catalog)?;

    loop {
        let prompt = MbaPrompt::new(state.session.selected());

        match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let result = match parse_input(line) {
                    Input::Quit => break,
                    Input::Slash(cmd) => commands::handle_slash(&mut state, &cmd),
                    Input::Verb(verb, args) => commands::handle_verb(&mut state, &verb, &args),
                    Input::Unknown(s) => {
                        print_unknown(&s);
                        Ok(())
                    }
                };
                if let Err(e) = result {
                    eprintln!("{}", crate::theme::red().paint(format!("error: {:#}", e)));
                }
            }
            Ok(Signal::CtrlC) => {
                // interrupt closes the suggestion list, nothing more
                state.session.dismiss();
                continue;
            }
            Ok(Signal::CtrlD) => {
                // eof - exit
                break;
            }
            Err(e) => {
                eprintln!("{}", crate::theme::red().paint(format!("error: {}", e)));
                break;
            }
        }
    }

    println!();
    Ok(())
}

fn create_editor(catalog: &Arc<Catalog>) -> Result<Reedline> {
    let history_path = history_path();

    // ensure parent directory exists
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let history = Box::new(FileBackedHistory::with_file(1000, history_path)?);
    let completer = Box::new(MbaCompleter::new(Arc::clone(catalog)));
    let highlighter = Box::new(MbaHighlighter::new(Arc::clone(catalog)));
    let hinter = Box::new(MbaHinter::new(Arc::clone(catalog)));

    let editor = Reedline::create()
        .with_history(history)
        .with_completer(completer)
        .with_highlighter(highlighter)
        .with_hinter(hinter)
        .with_edit_mode(Box::new(Vi::default()));

    Ok(editor)
}

fn history_path() -> PathBuf {
    Config::config_dir().join("history")
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Slash(String),
    Verb(String, String),
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();

    // slash commands
    if let Some(cmd) = line.strip_prefix('/') {
        if cmd == "q" || cmd == "quit" || cmd == "exit" {
            return Input::Quit;
        }
        return Input::Slash(cmd.to_string());
    }

    // quit without slash (including vim-style :q)
    if matches!(line, "quit" | "exit" | "q" | ":q" | ":q!" | ":wq") {
        return Input::Quit;
    }

    let (verb, args) = line.split_once(' ').unwrap_or((line, ""));
    if VERBS.contains(&verb) {
        // args keep inner spacing: school names are matched verbatim
        return Input::Verb(verb.to_string(), args.trim().to_string());
    }

    Input::Unknown(line.to_string())
}

fn print_unknown(cmd: &str) {
    use crate::theme;
    println!(
        "{} unknown command: {}",
        theme::yellow().paint("warning:"),
        theme::text().paint(cmd)
    );
    println!(
        "  type {} for available commands",
        theme::sapphire().paint("/help")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_forms() {
        for line in ["/q", "/quit", "quit", ":q", "exit"] {
            assert_eq!(parse_input(line), Input::Quit, "{line}");
        }
    }

    #[test]
    fn test_parse_verb_keeps_name() {
        assert_eq!(
            parse_input("school  Harvard Business School "),
            Input::Verb("school".to_string(), "Harvard Business School".to_string())
        );
        assert_eq!(
            parse_input("next"),
            Input::Verb("next".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_slash_and_unknown() {
        assert_eq!(parse_input("/theme plain"), Input::Slash("theme plain".to_string()));
        assert_eq!(parse_input("harvard"), Input::Unknown("harvard".to_string()));
    }
}
