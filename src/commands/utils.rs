use anyhow::{bail, Result};
use crossterm::tty::IsTty;
use std::fs;
use std::io::{stdin, stdout};
use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::theme;

pub fn stdin_is_interactive() -> bool {
    stdin().is_tty()
}

pub fn stdout_is_terminal() -> bool {
    stdout().is_tty()
}

/// write the default config unless one exists; returns true when created
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, Config::default_config_content())?;
    Ok(true)
}

pub fn print_config_init(path: &Path) -> Result<()> {
    if init_config(path)? {
        println!(
            "{} config file at: {}",
            theme::bold(theme::green()).paint("Created"),
            path.display()
        );
        println!("  edit with: {}", theme::sapphire().paint("mbaindex config edit"));
    } else {
        println!(
            "{} config already exists at: {}",
            theme::bold(theme::sapphire()).paint("note:"),
            path.display()
        );
    }
    Ok(())
}

/// open `path` in the configured editor, then $EDITOR, then nvim
pub fn open_in_editor(path: &Path) -> Result<()> {
    let config = Config::load();
    let editor = config
        .editor
        .unwrap_or_else(|| std::env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string()));

    // handle $EDITOR in config value
    let editor = if editor == "$EDITOR" {
        std::env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string())
    } else {
        editor
    };

    // split editor command in case it has args (e.g., "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let (cmd, args) = parts.split_first().map(|(&c, a)| (c, a)).unwrap_or(("nvim", &[]));

    let status = Command::new(cmd).args(args).arg(path).status()?;

    if !status.success() {
        bail!("editor '{}' exited with error", editor);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_only_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config(&path).unwrap());
        fs::write(&path, "theme = \"plain\"\n").unwrap();
        assert!(!init_config(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme = \"plain\"\n");
    }
}
