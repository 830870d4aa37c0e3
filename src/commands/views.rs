// terminal renderings shared by the CLI subcommands and the REPL

use crate::data::{seed, Catalog};
use crate::engine::rankings::{self, SortKey};
use crate::engine::{parse_course, resolve, skills};
use crate::theme;

const DESCRIPTION_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// shorten to `max` characters, marking the cut
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

pub fn print_suggestions(query: &str, matches: &[&str]) {
    println!();
    println!(
        "  {} for '{}' ({} matches)",
        theme::peach().paint("Schools"),
        theme::sapphire().paint(query),
        theme::text().paint(matches.len().to_string())
    );
    theme::rule();

    if matches.is_empty() {
        println!("    {}", theme::subtext0().paint("No schools found"));
    }
    for name in matches {
        println!("    {} {}", theme::overlay0().paint("•"), theme::teal().paint(*name));
    }
    println!();
}

/// course catalog for `name`
pub fn print_school(catalog: &Catalog, name: &str) {
    let school = resolve(&catalog.schools, name);

    println!();
    println!("  {}", theme::bold(theme::pink()).paint(&school.name));
    println!(
        "  {}",
        theme::subtext0().paint(format!(
            "Curriculum ({} Courses)",
            school.curriculum.len()
        ))
    );
    theme::rule();

    if !school.has_curriculum() {
        println!(
            "    {}",
            theme::subtext0().paint("No curriculum data found for this school.")
        );
        println!();
        return;
    }

    let code_width = school
        .curriculum
        .iter()
        .map(|c| parse_course(&c.course).code.chars().count())
        .max()
        .unwrap_or(0)
        .min(16);

    for course in &school.curriculum {
        let parsed = parse_course(&course.course);
        // pad before painting; ansi escapes defeat width specifiers
        let code = format!("{:<width$}", parsed.code, width = code_width);
        println!(
            "    {}  {}",
            theme::bold(theme::mauve()).paint(code),
            theme::sapphire().paint(parsed.title.trim())
        );
        if !course.description.trim().is_empty() {
            println!(
                "    {:<width$}  {}",
                "",
                theme::overlay0().paint(truncate(&course.description, DESCRIPTION_WIDTH)),
                width = code_width
            );
        }
    }
    println!();
}

pub fn print_rankings(catalog: &Catalog, key: SortKey, selected: Option<&str>) {
    let sorted = rankings::sort_by_key(&catalog.rankings, key);

    println!();
    theme::heading(&format!("School rankings ({})", key));
    println!(
        "    {}",
        theme::subtext0().paint(format!(
            "{:<5} {:<40} {:>4} {:>4} {:>4} {:>4}",
            "Rank", "Institution", "Nat", "Log", "Str", "Dec"
        ))
    );

    for record in &sorted {
        let marker = if selected == Some(record.school.as_str()) {
            theme::pink().paint("❯")
        } else {
            theme::overlay0().paint(" ")
        };
        println!(
            "  {} {:<5} {:<40} {} {:>4} {:>4} {:>4}",
            marker,
            format!("{:02}", record.rank),
            truncate(&record.school, 40),
            theme::bold(theme::text()).paint(format!("{:>4}", record.national_score)),
            record.logistics,
            record.strategy,
            record.decision
        );
    }
    println!();
}

pub fn print_jobs(catalog: &Catalog, limit: usize, location: Option<&str>) {
    let feed = catalog.feed(limit, location);

    println!();
    theme::heading("Live data feed");

    if feed.is_empty() {
        println!("    {}", theme::subtext0().paint("No job postings loaded"));
    }

    for job in &feed {
        println!(
            "    {}  {}",
            theme::bold(theme::text()).paint(&job.title),
            theme::mauve().paint(job.company.to_uppercase())
        );
        println!(
            "      {}  {}",
            theme::subtext0().paint(&job.date_collected),
            theme::overlay0().paint(job.location_searched.to_uppercase())
        );
        if !job.description.trim().is_empty() {
            println!(
                "      {}",
                theme::overlay0().paint(truncate(&job.description, DESCRIPTION_WIDTH))
            );
        }
    }

    theme::rule();
    let latest = catalog
        .latest_collection()
        .map(|d| format!(" • latest {}", d))
        .unwrap_or_default();
    println!(
        "  {}",
        theme::subtext0().paint(format!("{} records{}", catalog.jobs.len(), latest))
    );
    println!();
}

/// competency chart for the selected school against market demand
pub fn print_compare(catalog: &Catalog, school: Option<&str>, by_gap: bool) {
    let gaps = if by_gap {
        skills::gaps_by_size(&catalog.skills)
    } else {
        skills::gaps(&catalog.skills)
    };
    let summary = skills::alignment(&catalog.skills);

    println!();
    theme::heading(&format!(
        "{} vs national market",
        school.unwrap_or("School")
    ));

    for gap in &gaps {
        let gap_style = if gap.gap > 0 {
            theme::red()
        } else {
            theme::green()
        };
        println!("    {}", theme::bold(theme::text()).paint(gap.skill));
        println!(
            "      {} {:>3} {}",
            theme::subtext0().paint("school"),
            gap.school,
            theme::teal().paint(theme::bar(gap.school, BAR_WIDTH))
        );
        println!(
            "      {} {:>3} {}  {}",
            theme::subtext0().paint("market"),
            gap.market,
            theme::red().paint(theme::bar(gap.market, BAR_WIDTH)),
            gap_style.paint(format!("gap {:+}", gap.gap))
        );
    }

    theme::rule();
    println!(
        "  {} {:.1}   {} {:.1}   {} {}",
        theme::subtext0().paint("points"),
        summary.points,
        theme::subtext0().paint("penalty"),
        summary.penalty,
        theme::subtext0().paint("alignment"),
        theme::bold(theme::pink()).paint(format!("{:.1}", summary.score))
    );
    println!();
}

pub fn print_method() {
    println!();
    theme::heading("How it works");

    for step in seed::PIPELINE {
        println!(
            "    {} {}  {}",
            theme::overlay0().paint(step.number),
            theme::bold(theme::pink()).paint(step.title),
            theme::subtext0().paint(step.subtitle)
        );
        println!("       {}", theme::text().paint(step.description));
        for detail in step.details {
            println!("       {} {}", theme::overlay0().paint("•"), theme::subtext0().paint(*detail));
        }
        println!();
    }

    theme::heading("Scoring");
    for metric in seed::SCORING {
        println!("    {}", theme::sapphire().paint(metric.title));
        println!("       {}", theme::subtext0().paint(metric.description));
        println!("       {}", theme::yellow().paint(metric.formula));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("  Intro  ", 10), "Intro");
    }

    #[test]
    fn test_truncate_marks_cut() {
        let cut = truncate("Operations management for complex systems", 12);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 12);
    }
}
