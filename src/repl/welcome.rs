// welcome screen with logo, live data headline and tips

use crate::theme;

use super::ReplState;

pub fn print_welcome(state: &ReplState) {
    print_logo();
    print_headline(state);
    print_tips();
    print_defaults(state);
    println!();
}

fn print_logo() {
    for line in theme::LOGO.lines() {
        if !line.is_empty() {
            println!("{}", theme::pink().paint(line));
        }
    }
    println!("  {}", theme::subtext0().paint(theme::TAGLINE));
    println!();
}

fn print_headline(state: &ReplState) {
    let jobs = state.catalog.jobs.len();
    println!(
        "  {} {}",
        theme::green().paint("●"),
        theme::bold(theme::text()).paint(format!("Live Data — {} Jobs Analyzed", jobs))
    );
    if let Some(latest) = state.catalog.latest_collection() {
        println!(
            "    {}",
            theme::subtext0().paint(format!("latest collection {}", latest))
        );
    }
    println!();
}

fn print_tips() {
    theme::heading("Tips");
    print_tip("search <text>", "find a school by any part of its name");
    print_tip("school", "pick from the matches");
    print_tip("next, prev", "step through schools");
    print_tip("compare", "skills against market demand");
    print_tip("Tab", "complete school names");
    print_tip("/help", "all commands");
    println!();
}

fn print_tip(cmd: &str, desc: &str) {
    println!(
        "  {}  {} {}",
        theme::overlay0().paint("•"),
        theme::sapphire().paint(format!("{:<16}", cmd)),
        theme::subtext0().paint(desc)
    );
}

fn print_defaults(state: &ReplState) {
    let data = state
        .catalog
        .report
        .data_dir
        .as_ref()
        .map(|p| shorten_path(&p.display().to_string()))
        .unwrap_or_else(|| "bundled".to_string());

    let selected = state.session.selected().unwrap_or("none");

    theme::rule();
    println!(
        "  {}: {}   {}: {}   {}: {}",
        theme::subtext0().paint("data"),
        theme::text().paint(&data),
        theme::subtext0().paint("schools"),
        theme::text().paint(state.catalog.index.len().to_string()),
        theme::subtext0().paint("selected"),
        theme::text().paint(selected),
    );
}

fn shorten_path(path: &str) -> String {
    // replace home dir with ~
    if let Some(home) = dirs::home_dir() {
        if let Some(home_str) = home.to_str() {
            if let Some(rest) = path.strip_prefix(home_str) {
                return format!("~{}", rest);
            }
        }
    }
    path.to_string()
}
