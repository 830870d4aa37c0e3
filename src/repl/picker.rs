// interactive school picker using inquire

use anyhow::Result;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::Select;

use crate::engine::normalize::match_key;

/// catppuccin-styled render config
fn catppuccin_config() -> RenderConfig<'static> {
    let pink = Color::Rgb { r: 245, g: 194, b: 231 };
    let teal = Color::Rgb { r: 148, g: 226, b: 213 };
    let peach = Color::Rgb { r: 250, g: 179, b: 135 };
    let subtext0 = Color::Rgb { r: 166, g: 173, b: 200 };
    let overlay0 = Color::Rgb { r: 108, g: 112, b: 134 };
    let text = Color::Rgb { r: 205, g: 214, b: 244 };
    // subtle background for highlighted row
    let surface0 = Color::Rgb { r: 49, g: 50, b: 68 };

    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(pink),
        answered_prompt_prefix: Styled::new("✓").with_fg(teal),
        prompt: StyleSheet::new().with_fg(text),
        placeholder: StyleSheet::new().with_fg(overlay0),
        help_message: StyleSheet::new().with_fg(subtext0),
        text_input: StyleSheet::new().with_fg(text),
        answer: StyleSheet::new().with_fg(teal),
        canceled_prompt_indicator: Styled::new("✗").with_fg(peach),
        highlighted_option_prefix: Styled::new("❯").with_fg(pink),
        selected_option: Some(StyleSheet::new().with_fg(teal).with_bg(surface0)),
        scroll_up_prefix: Styled::new("▲").with_fg(overlay0),
        scroll_down_prefix: Styled::new("▼").with_fg(overlay0),
        option: StyleSheet::new().with_fg(text),
        option_index_prefix: inquire::ui::IndexPrefix::None,
        ..RenderConfig::default()
    }
}

fn render_config() -> RenderConfig<'static> {
    if crate::theme::theme_name() == "plain" {
        RenderConfig::empty()
    } else {
        catppuccin_config()
    }
}

/// filter rule for the picker: same containment test as `suggest`
fn school_score(input: &str, value: &str) -> Option<i64> {
    (input.is_empty() || match_key(value).contains(&match_key(input))).then_some(0)
}

/// pick one school from `options`; None when cancelled or nothing to pick
pub fn pick_school(options: Vec<String>) -> Result<Option<String>> {
    if options.is_empty() {
        return Ok(None);
    }

    let result = Select::new("Select a school:", options)
        .with_vim_mode(true)
        .with_page_size(12)
        .with_scorer(&|input, _, value, _| school_score(input, value))
        .with_help_message("↑↓ navigate, type to filter, Enter select, Esc cancel")
        .with_render_config(render_config())
        .prompt_skippable()?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::suggest;

    #[test]
    fn test_filter_is_containment_not_fuzzy() {
        let name = "Harvard Business School";
        assert_eq!(school_score("hrvrd", name), None);
        assert_eq!(school_score("HARVARD", name), Some(0));
        assert_eq!(school_score("business_school", name), Some(0));
        assert_eq!(school_score("", name), Some(0));
    }

    #[test]
    fn test_filter_agrees_with_suggest() {
        let names = [
            "Harvard Business School",
            "MIT Sloan School of Management",
            "Wharton School (UPenn)",
        ];
        for query in ["hrvrd", "school", "sloan", "upenn)", "x"] {
            let picked: Vec<&str> = names
                .iter()
                .copied()
                .filter(|n| school_score(query, n).is_some())
                .collect();
            assert_eq!(picked, suggest(&names, query), "query {query}");
        }
    }
}
