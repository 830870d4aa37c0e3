// user configuration
// loaded from ~/.config/mbaindex/config.toml

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{DedupMode, SortKey, StartMode};

/// environment override for the data directory
pub const DATA_DIR_ENV: &str = "MBAINDEX_DATA_DIR";

const DEFAULT_JOB_LIMIT: usize = 50;

/// user configuration for mbaindex
#[derive(Debug, Clone, Default)]
pub struct Config {
    // data
    pub data_dir: Option<String>,       // directory holding schools/ and jobs.json
    pub dedupe: Option<String>,         // "exact" (default) or "normalized"
    // view
    pub start: Option<String>,          // "default" or "search"
    pub default_school: Option<String>, // selected at start instead of the first entry
    pub sort: Option<String>,           // e.g. "highest-national"
    pub job_limit: Option<usize>,       // rows in the job feed
    // editor
    pub editor: Option<String>,         // editor for /config edit
    // theme
    pub theme: Option<String>,          // "catppuccin" (default), "basic", or "plain"
}

impl Config {
    /// load config from ~/.config/mbaindex/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// path to config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// path to config directory (~/.config/mbaindex)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("mbaindex")
    }

    /// parse toml content into config
    fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() || line.starts_with('[') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                match key {
                    "data_dir" | "data" => config.data_dir = Some(value.to_string()),
                    "dedupe" | "dedup" => config.dedupe = Some(value.to_string()),
                    "start" => config.start = Some(value.to_string()),
                    "default_school" => config.default_school = Some(value.to_string()),
                    "sort" => config.sort = Some(value.to_string()),
                    "job_limit" => match value.parse() {
                        Ok(n) => config.job_limit = Some(n),
                        Err(_) => tracing::warn!(value, "job_limit is not a number, ignoring"),
                    },
                    "editor" | "command" => config.editor = Some(value.to_string()),
                    "theme" => config.theme = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        config
    }

    /// --data-dir, then $MBAINDEX_DATA_DIR, then the config file
    pub fn resolve_data_dir(&self, cli: Option<&Path>) -> Option<PathBuf> {
        if let Some(dir) = cli {
            return Some(dir.to_path_buf());
        }
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        self.data_dir.as_deref().map(expand_home)
    }

    pub fn dedup_mode(&self) -> DedupMode {
        match self.dedupe.as_deref() {
            None => DedupMode::default(),
            Some(value) => DedupMode::from_name(value).unwrap_or_else(|| {
                tracing::warn!(value, "unknown dedupe mode, using exact");
                DedupMode::default()
            }),
        }
    }

    pub fn start_mode(&self) -> StartMode {
        match self.start.as_deref() {
            None => StartMode::default(),
            Some(value) => StartMode::from_name(value).unwrap_or_else(|| {
                tracing::warn!(value, "unknown start mode, using default");
                StartMode::default()
            }),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        match self.sort.as_deref() {
            None => SortKey::default(),
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(value, error = %e, "invalid sort in config");
                SortKey::default()
            }),
        }
    }

    pub fn job_limit(&self) -> usize {
        self.job_limit.unwrap_or(DEFAULT_JOB_LIMIT)
    }

    /// generate default config file content
    pub fn default_config_content() -> String {
        r#"# mbaindex configuration

[data]
# directory containing schools/*.json, schools.manifest and jobs.json
# can also be set with $MBAINDEX_DATA_DIR or --data-dir
# data_dir = "~/mba-data"

# how duplicate school names are collapsed: "exact" or "normalized"
# normalized treats "Harvard_Business_School" and "harvard business school" as one
dedupe = "exact"

[view]
# "default" starts with the first school selected, "search" starts empty
start = "default"

# school selected at start (overrides the first entry)
# default_school = "MIT Sloan School of Management"

# leaderboard order: highest-national, lowest-national, strategy:asc, ...
sort = "highest-national"

# rows shown in the live job feed
job_limit = 50

[editor]
# editor for /config edit
# uses $EDITOR if set, otherwise falls back to nvim
# command = "$EDITOR"

[theme]
# colour theme: "catppuccin" (default), "basic" (16 colours), "plain" (no colours)
# theme = "catppuccin"
"#
        .to_string()
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rankings::{Direction, SortField};

    #[test]
    fn test_parse_config() {
        let content = r#"
[data]
data_dir = "/srv/mba"
dedupe = "normalized"

[view]
start = "search"
default_school = "Harvard Business School"
sort = "lowest-national"
job_limit = 20
"#;

        let config = Config::parse(content);
        assert_eq!(config.data_dir, Some("/srv/mba".to_string()));
        assert_eq!(config.dedup_mode(), DedupMode::Normalized);
        assert_eq!(config.start_mode(), StartMode::SearchFirst);
        assert_eq!(
            config.default_school,
            Some("Harvard Business School".to_string())
        );
        assert_eq!(
            config.sort_key(),
            SortKey {
                field: SortField::National,
                direction: Direction::Ascending,
            }
        );
        assert_eq!(config.job_limit(), 20);
    }

    #[test]
    fn test_empty_returns_default() {
        let config = Config::parse("");
        assert!(config.data_dir.is_none());
        assert_eq!(config.job_limit(), 50);
        assert_eq!(config.sort_key(), SortKey::default());
        assert_eq!(config.start_mode(), StartMode::DefaultSelection);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::parse("sort = \"by-vibes\"\nstart = \"sideways\"\njob_limit = \"lots\"\n");
        assert_eq!(config.sort_key(), SortKey::default());
        assert_eq!(config.start_mode(), StartMode::DefaultSelection);
        assert_eq!(config.job_limit(), 50);
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config = Config::parse(&Config::default_config_content());
        assert!(config.data_dir.is_none());
        assert_eq!(config.dedup_mode(), DedupMode::Exact);
        assert_eq!(config.sort_key(), SortKey::default());
    }

    #[test]
    fn test_cli_data_dir_wins() {
        let config = Config::parse("data_dir = \"/from/config\"");
        let dir = config.resolve_data_dir(Some(Path::new("/from/cli")));
        assert_eq!(dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert!(config.theme.is_none());
    }
}
