use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod data;
mod engine;
mod repl;
mod theme;

use commands::{output, utils, views};
use config::Config;
use data::Catalog;
use engine::{Session, SortKey};

#[derive(Parser)]
#[command(name = "mbaindex")]
#[command(version)]
#[command(about = "Compare MBA curricula against job-market demand", long_about = None)]
struct Cli {
    /// Data directory with schools/, schools.manifest and jobs.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List schools whose name contains the query
    Search {
        /// Query text (case-insensitive, underscores match spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a school's course catalog
    School {
        /// Exact school name
        #[arg(required = true)]
        name: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the school leaderboard
    Rankings {
        /// Sort key, e.g. highest-national, lowest-national, strategy:asc
        #[arg(long, short = 's')]
        sort: Option<SortKey>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the live job feed
    Jobs {
        /// Number of postings to show (default: job_limit from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Only postings whose searched location contains this text
        #[arg(long, short = 'l')]
        location: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare a school's competency coverage with market demand
    Compare {
        /// School name (default: the start selection)
        school: Vec<String>,

        /// Order competencies by widest gap first
        #[arg(long)]
        by_gap: bool,
    },
    /// Explain the data pipeline and scoring
    Method,
    /// Manage user configuration (~/.config/mbaindex/config.toml)
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Inspect or pin the data directory
    Data {
        #[command(subcommand)]
        action: Option<DataAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Create default config file
    Init,
    /// Show config file path
    Path,
    /// Edit config file (opens in $EDITOR)
    Edit,
}

#[derive(Subcommand)]
enum DataAction {
    /// Show what was loaded and from where
    Status,
    /// Write schools.manifest from the schools/ directory
    Manifest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // load config and initialise theme
    let cfg = Config::load();
    if !utils::stdout_is_terminal() {
        theme::set_theme("plain");
    } else if let Some(theme_name) = &cfg.theme {
        theme::set_theme(theme_name);
    }

    let data_dir = cfg.resolve_data_dir(cli.data_dir.as_deref());

    // commands that must work without loadable data
    match &cli.command {
        Some(Commands::Config { action }) => return config_command(action.as_ref()),
        Some(Commands::Data {
            action: Some(DataAction::Manifest),
        }) => return commands::data::write_manifest(data_dir.as_deref()),
        _ => {}
    }

    let catalog = load_catalog(data_dir.as_deref(), &cfg)?;

    match cli.command {
        // no subcommand → launch REPL
        None => {
            if !utils::stdin_is_interactive() {
                bail!("no command given and stdin is not a terminal (see --help)");
            }
            repl::run(catalog, cfg)?;
        }
        Some(Commands::Search { query, json }) => {
            let query = query.join(" ");
            let matches = engine::suggest(catalog.index.names(), &query);
            if json {
                println!("{}", output::search_json(&query, &matches)?);
            } else {
                views::print_suggestions(&query, &matches);
            }
        }
        Some(Commands::School { name, json }) => {
            let name = name.join(" ");
            if json {
                println!("{}", output::school_json(&catalog, &name)?);
            } else {
                views::print_school(&catalog, &name);
            }
        }
        Some(Commands::Rankings { sort, json }) => {
            let key = sort.unwrap_or_else(|| cfg.sort_key());
            if json {
                println!("{}", output::rankings_json(&catalog, key)?);
            } else {
                views::print_rankings(&catalog, key, None);
            }
        }
        Some(Commands::Jobs {
            limit,
            location,
            json,
        }) => {
            let limit = limit.unwrap_or_else(|| cfg.job_limit());
            if json {
                println!(
                    "{}",
                    output::jobs_json(&catalog, limit, location.as_deref())?
                );
            } else {
                views::print_jobs(&catalog, limit, location.as_deref());
            }
        }
        Some(Commands::Compare { school, by_gap }) => {
            let session = start_session(&catalog, &cfg);
            let school = if school.is_empty() {
                session.selected().map(str::to_string)
            } else {
                Some(school.join(" "))
            };
            views::print_compare(&catalog, school.as_deref(), by_gap);
        }
        Some(Commands::Method) => views::print_method(),
        Some(Commands::Data { .. }) => commands::data::status(&catalog),
        Some(Commands::Config { .. }) => unreachable!("handled before loading data"),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mbaindex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn load_catalog(dir: Option<&Path>, cfg: &Config) -> Result<Catalog> {
    match dir {
        Some(dir) => Catalog::load(dir, cfg.dedup_mode())
            .with_context(|| format!("failed to load data from {}", dir.display())),
        None => Ok(Catalog::bundled(cfg.dedup_mode())),
    }
}

/// session in its configured start state
pub fn start_session(catalog: &Catalog, cfg: &Config) -> Session {
    let mut session = Session::new(&catalog.index, cfg.start_mode());
    if let Some(name) = &cfg.default_school {
        session.select(&catalog.index, name);
    }
    session
}

fn config_command(action: Option<&ConfigAction>) -> Result<()> {
    let config_path = Config::config_path();

    match action {
        Some(ConfigAction::Init) | None => utils::print_config_init(&config_path),
        Some(ConfigAction::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigAction::Edit) => {
            utils::init_config(&config_path)?;
            utils::open_in_editor(&config_path)
        }
    }
}
