// REPL command handlers: catalog verbs and slash commands

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::stdout;

use crate::commands::{data, utils, views};
use crate::config::Config;
use crate::engine::SortKey;
use crate::theme;

use super::picker;
use super::ReplState;

/// handle a catalog verb such as `school Harvard Business School`
pub fn handle_verb(state: &mut ReplState, verb: &str, args: &str) -> Result<()> {
    match verb {
        "search" => cmd_search(state, args),
        "school" => cmd_school(state, args),
        "next" => {
            state.session.next(&state.catalog.index);
            print_position(state);
            print_selected(state);
            Ok(())
        }
        "prev" => {
            state.session.prev(&state.catalog.index);
            print_position(state);
            print_selected(state);
            Ok(())
        }
        "courses" => {
            print_selected(state);
            Ok(())
        }
        "rankings" => cmd_rankings(state, args),
        "jobs" => cmd_jobs(state, args),
        "compare" => cmd_compare(state, args),
        _ => Ok(()),
    }
}

/// handle a slash command (without the leading /)
pub fn handle_slash(state: &mut ReplState, cmd: &str) -> Result<()> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let (command, args) = parts.split_first().map(|(&c, a)| (c, a)).unwrap_or(("", &[]));

    match command {
        "help" | "h" | "?" => cmd_help(),
        "config" => cmd_config(state, args),
        "data" => {
            data::status(&state.catalog);
            Ok(())
        }
        "method" => {
            views::print_method();
            Ok(())
        }
        "theme" | "th" => cmd_theme(args),
        "clear" => cmd_clear(),
        _ => {
            println!(
                "{} unknown command: /{}",
                theme::yellow().paint("warning:"),
                theme::text().paint(command)
            );
            println!(
                "  type {} for available commands",
                theme::sapphire().paint("/help")
            );
            Ok(())
        }
    }
}

fn cmd_search(state: &mut ReplState, query: &str) -> Result<()> {
    if query.is_empty() {
        // bare search reopens the last result list
        let query = state.session.query().to_string();
        if query.is_empty() {
            println!("  usage: {}", theme::sapphire().paint("search <text>"));
            return Ok(());
        }
        return cmd_search(state, &query);
    }

    let matches = state.session.set_query(&state.catalog.index, query);
    let matches: Vec<&str> = matches.iter().map(String::as_str).collect();
    views::print_suggestions(query, &matches);

    if !matches.is_empty() {
        println!(
            "  {} to pick one, {} to open the query as typed",
            theme::sapphire().paint("school"),
            theme::sapphire().paint(format!("school {}", query))
        );
        println!();
    }
    Ok(())
}

fn cmd_school(state: &mut ReplState, name: &str) -> Result<()> {
    if !name.is_empty() {
        // the typed name is selected as is, even when it matches nothing
        state.session.set_query(&state.catalog.index, name);
        state.session.submit(&state.catalog.index);
        print_selected(state);
        return Ok(());
    }

    // pick from open suggestions, or the whole index
    let open = state.session.suggestions();
    let options: Vec<String> = if open.is_empty() {
        state.catalog.index.names().to_vec()
    } else {
        open.to_vec()
    };

    match picker::pick_school(options)? {
        Some(choice) => {
            state.session.select(&state.catalog.index, &choice);
            print_selected(state);
        }
        None => {
            state.session.dismiss();
            println!("{}", theme::yellow().paint("cancelled"));
        }
    }
    Ok(())
}

fn cmd_rankings(state: &mut ReplState, args: &str) -> Result<()> {
    if !args.is_empty() {
        match args.parse::<SortKey>() {
            Ok(key) => state.sort = key,
            Err(e) => {
                println!("{} {}", theme::yellow().paint("warning:"), e);
                return Ok(());
            }
        }
    }
    views::print_rankings(&state.catalog, state.sort, state.session.selected());
    Ok(())
}

fn cmd_jobs(state: &mut ReplState, args: &str) -> Result<()> {
    let limit = if args.is_empty() {
        state.config.job_limit()
    } else {
        match args.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                println!(
                    "{} not a number: {}",
                    theme::yellow().paint("warning:"),
                    theme::text().paint(args)
                );
                return Ok(());
            }
        }
    };
    views::print_jobs(&state.catalog, limit, None);
    Ok(())
}

fn cmd_compare(state: &mut ReplState, args: &str) -> Result<()> {
    let (by_gap, name) = match args {
        "gap" | "--by-gap" => (true, None),
        "" => (false, None),
        name => (false, Some(name)),
    };
    let school = name.or(state.session.selected());
    views::print_compare(&state.catalog, school, by_gap);
    Ok(())
}

fn print_position(state: &ReplState) {
    let total = state.catalog.index.len();
    if total > 0 {
        println!(
            "  {}",
            theme::overlay0().paint(format!("{} of {}", state.session.cursor() + 1, total))
        );
    }
}

fn print_selected(state: &ReplState) {
    match state.session.selected() {
        Some(name) => views::print_school(&state.catalog, name),
        None => {
            println!(
                "  {} search for a school first, e.g. {}",
                theme::subtext0().paint("no school selected:"),
                theme::sapphire().paint("search harvard")
            );
        }
    }
}

fn cmd_help() -> Result<()> {
    println!();
    theme::heading("Commands");
    println!();

    println!("  {}", theme::subtext0().paint("Schools"));
    print_help_item("search <text>", "list matching schools");
    print_help_item("school <name>", "open a school's curriculum");
    print_help_item("school", "pick from the last search");
    print_help_item("next, prev", "step through schools");
    print_help_item("courses", "show the selected school again");
    println!();

    println!("  {}", theme::subtext0().paint("Market"));
    print_help_item("rankings [sort]", "leaderboard, e.g. lowest-national");
    print_help_item("jobs [n]", "latest job postings");
    print_help_item("compare [gap]", "skills vs market demand");
    println!();

    println!("  {}", theme::subtext0().paint("Slash commands"));
    print_help_item("/help, /h", "show this help");
    print_help_item("/config", "show current configuration");
    print_help_item("/config edit", "edit config in $EDITOR");
    print_help_item("/config init", "create default config");
    print_help_item("/data", "where the data came from");
    print_help_item("/method", "how the index is built");
    print_help_item("/theme [name]", "catppuccin, basic or plain");
    print_help_item("/clear", "clear the screen");
    print_help_item("/quit, /q", "exit mbaindex");
    println!();

    println!("  {}", theme::subtext0().paint("Keybindings (vi mode)"));
    print_help_item("Esc", "switch to normal mode");
    print_help_item("i, a", "switch to insert mode");
    print_help_item("Ctrl+R", "reverse search history");
    print_help_item("Tab", "complete school names");
    print_help_item("→", "accept ghost text");
    print_help_item("Ctrl+C", "close suggestions");
    println!();

    Ok(())
}

fn print_help_item(cmd: &str, desc: &str) {
    println!(
        "    {} {}",
        theme::sapphire().paint(format!("{:<24}", cmd)),
        theme::subtext0().paint(desc)
    );
}

fn cmd_config(state: &mut ReplState, args: &[&str]) -> Result<()> {
    let config_path = Config::config_path();

    match args.first().copied().unwrap_or("") {
        "" => {
            let config = &state.config;
            println!();
            theme::heading("Configuration");
            print_config_value("config file", &config_path.display().to_string());
            println!();

            let data_dir = state
                .catalog
                .report
                .data_dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "(bundled)".to_string());
            println!("  {}", theme::subtext0().paint("[data]"));
            print_config_value("data_dir", &data_dir);
            print_config_value("dedupe", config.dedupe.as_deref().unwrap_or("exact"));
            println!();

            println!("  {}", theme::subtext0().paint("[view]"));
            print_config_value("start", config.start.as_deref().unwrap_or("default"));
            print_config_value(
                "default_school",
                config.default_school.as_deref().unwrap_or("(first school)"),
            );
            print_config_value("sort", &state.sort.to_string());
            print_config_value("job_limit", &config.job_limit().to_string());
            println!();

            println!("  {}", theme::subtext0().paint("[theme]"));
            print_config_value("theme", theme::theme_name());
            println!();
            Ok(())
        }
        "init" => utils::print_config_init(&config_path),
        "path" => {
            println!("{}", config_path.display());
            Ok(())
        }
        "edit" => {
            utils::init_config(&config_path)?;
            utils::open_in_editor(&config_path)?;
            // pick up the edits for the rest of the session
            state.config = Config::load();
            state.sort = state.config.sort_key();
            if let Some(name) = &state.config.theme {
                theme::set_theme(name);
            }
            Ok(())
        }
        other => {
            println!(
                "{} unknown config action: {}",
                theme::yellow().paint("warning:"),
                theme::text().paint(other)
            );
            Ok(())
        }
    }
}

fn print_config_value(key: &str, value: &str) {
    println!(
        "    {} {}",
        theme::subtext0().paint(format!("{:<16}", format!("{}:", key))),
        theme::text().paint(value)
    );
}

fn cmd_theme(args: &[&str]) -> Result<()> {
    match args.first() {
        Some(name) => {
            theme::set_theme(name);
            println!(
                "  theme: {}",
                theme::teal().paint(theme::theme_name())
            );
        }
        None => {
            println!(
                "  theme: {}  {}",
                theme::teal().paint(theme::theme_name()),
                theme::overlay0().paint("(catppuccin | basic | plain)")
            );
        }
    }
    Ok(())
}

fn cmd_clear() -> Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
