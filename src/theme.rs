// terminal theme: catppuccin mocha by default
// https://github.com/catppuccin/catppuccin

use nu_ansi_term::{Color, Style};
use std::sync::atomic::{AtomicU8, Ordering};

const THEME_CATPPUCCIN: u8 = 0;
const THEME_BASIC: u8 = 1;
const THEME_PLAIN: u8 = 2;

static THEME_MODE: AtomicU8 = AtomicU8::new(THEME_CATPPUCCIN);

/// set the active theme mode by name
pub fn set_theme(name: &str) {
    let mode = match name.to_lowercase().as_str() {
        "basic" | "16" => THEME_BASIC,
        "plain" | "none" | "off" => THEME_PLAIN,
        _ => THEME_CATPPUCCIN,
    };
    THEME_MODE.store(mode, Ordering::Relaxed);
}

pub fn theme_name() -> &'static str {
    match mode() {
        THEME_BASIC => "basic",
        THEME_PLAIN => "plain",
        _ => "catppuccin",
    }
}

fn mode() -> u8 {
    THEME_MODE.load(Ordering::Relaxed)
}

// catppuccin mocha palette, paired with the nearest 16-colour fallback
const PINK: (Color, Color) = (Color::Rgb(245, 194, 231), Color::LightMagenta);
const MAUVE: (Color, Color) = (Color::Rgb(203, 166, 247), Color::Magenta);
const RED: (Color, Color) = (Color::Rgb(243, 139, 168), Color::Red);
const PEACH: (Color, Color) = (Color::Rgb(250, 179, 135), Color::Yellow);
const YELLOW: (Color, Color) = (Color::Rgb(249, 226, 175), Color::LightYellow);
const GREEN: (Color, Color) = (Color::Rgb(166, 227, 161), Color::Green);
const TEAL: (Color, Color) = (Color::Rgb(148, 226, 213), Color::Cyan);
const SAPPHIRE: (Color, Color) = (Color::Rgb(116, 199, 236), Color::LightBlue);
const TEXT: (Color, Color) = (Color::Rgb(205, 214, 244), Color::White);
const SUBTEXT0: (Color, Color) = (Color::Rgb(166, 173, 200), Color::LightGray);
const OVERLAY0: (Color, Color) = (Color::Rgb(108, 112, 134), Color::DarkGray);

fn style((rgb, basic): (Color, Color)) -> Style {
    match mode() {
        THEME_PLAIN => Style::new(),
        THEME_BASIC => Style::new().fg(basic),
        _ => Style::new().fg(rgb),
    }
}

fn color((rgb, basic): (Color, Color)) -> Color {
    match mode() {
        THEME_BASIC => basic,
        THEME_PLAIN => Color::Default,
        _ => rgb,
    }
}

/// bold unless the plain theme is active
pub fn bold(style: Style) -> Style {
    if mode() == THEME_PLAIN {
        style
    } else {
        style.bold()
    }
}

pub fn pink() -> Style {
    style(PINK)
}

pub fn mauve() -> Style {
    style(MAUVE)
}

pub fn red() -> Style {
    style(RED)
}

pub fn peach() -> Style {
    style(PEACH)
}

pub fn yellow() -> Style {
    style(YELLOW)
}

pub fn green() -> Style {
    style(GREEN)
}

pub fn teal() -> Style {
    style(TEAL)
}

pub fn sapphire() -> Style {
    style(SAPPHIRE)
}

pub fn text() -> Style {
    style(TEXT)
}

pub fn subtext0() -> Style {
    style(SUBTEXT0)
}

pub fn overlay0() -> Style {
    style(OVERLAY0)
}

// raw colours for reedline styling
pub fn color_text() -> Color {
    color(TEXT)
}

pub fn color_sapphire() -> Color {
    color(SAPPHIRE)
}

pub fn color_teal() -> Color {
    color(TEAL)
}

pub fn color_mauve() -> Color {
    color(MAUVE)
}

pub fn color_peach() -> Color {
    color(PEACH)
}

pub fn color_overlay0() -> Color {
    color(OVERLAY0)
}

/// section heading with the underline used across views
pub fn heading(title: &str) {
    println!("  {}", peach().paint(title));
    rule();
}

pub fn rule() {
    println!(
        "  {}",
        overlay0().paint("─────────────────────────────────────────────")
    );
}

/// fixed-width bar for a 0-100 score
pub fn bar(value: u32, width: usize) -> String {
    let filled = (value.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub const LOGO: &str = r#"
  ███╗   ███╗██████╗  █████╗     ██╗███╗   ██╗██████╗ ███████╗██╗  ██╗
  ████╗ ████║██╔══██╗██╔══██╗    ██║████╗  ██║██╔══██╗██╔════╝╚██╗██╔╝
  ██╔████╔██║██████╔╝███████║    ██║██╔██╗ ██║██║  ██║█████╗   ╚███╔╝
  ██║╚██╔╝██║██╔══██╗██╔══██║    ██║██║╚██╗██║██║  ██║██╔══╝   ██╔██╗
  ██║ ╚═╝ ██║██████╔╝██║  ██║    ██║██║ ╚████║██████╔╝███████╗██╔╝ ██╗
  ╚═╝     ╚═╝╚═════╝ ╚═╝  ╚═╝    ╚═╝╚═╝  ╚═══╝╚═════╝ ╚══════╝╚═╝  ╚═╝
"#;

pub const TAGLINE: &str = "compare a business school to the market";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0, 10), "░░░░░░░░░░");
        assert_eq!(bar(100, 10), "██████████");
        assert_eq!(bar(250, 4), "████");
        assert_eq!(bar(50, 10).chars().filter(|&c| c == '█').count(), 5);
    }
}
