//! Command-line argument parsing for the replay binary

use crate::config::Config;
use crate::logging::DEFAULT_LOG_FILE;
use crate::types::{ConfigPath, RefreshIntervalMs, TerminalColumns};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Where metric batches are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-`)
    Stdin,
    /// A JSON-lines file
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl std::str::FromStr for InputSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Input path cannot be empty".to_string()),
            "-" => Ok(Self::Stdin),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Replay a stream of metric batches through the live progress table
///
/// Each input line is one batch: a JSON array of rows such as
/// `{"name": "SelectedRows", "host_name": "h1", "value": 100, "kind": "increment"}`.
#[derive(Parser, Debug, Clone)]
#[command(name = "progress-table", version)]
pub struct Args {
    /// Configuration file path (defaults are used if it does not exist)
    #[arg(short, long, default_value = "progress-table.toml", env = "PROGRESS_TABLE_CONFIG")]
    pub config: ConfigPath,

    /// JSON-lines input file, or `-` for stdin
    ///
    /// A file is read as fast as possible, so without `--pace` a short
    /// recording may end before the first redraw and only the summary shows.
    #[arg(short, long, default_value = "-")]
    pub input: InputSource,

    /// Delay after each input batch such as `100ms`, to play back a recording
    #[arg(short, long)]
    pub pace: Option<RefreshIntervalMs>,

    /// Extra event definitions (overrides `catalog.path` from the config)
    #[arg(long, env = "PROGRESS_TABLE_CATALOG")]
    pub catalog: Option<ConfigPath>,

    /// Redraw interval such as `250`, `100ms` or `1s` (overrides config)
    #[arg(short, long)]
    pub refresh: Option<RefreshIntervalMs>,

    /// Disable collapsing the table with the space key
    #[arg(long)]
    pub no_toggle: bool,

    /// Do not print the summary table when input ends
    #[arg(long)]
    pub no_final: bool,

    /// Fixed terminal width in columns instead of querying the terminal
    #[arg(short, long)]
    pub width: Option<TerminalColumns>,

    /// Log file path
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Also write logs to stderr (mixes with the table unless it is hidden)
    #[arg(long)]
    pub log_stderr: bool,
}

impl Args {
    /// Catalog file from the command line, else from the config
    #[must_use]
    pub fn effective_catalog<'a>(&'a self, config: &'a Config) -> Option<&'a Path> {
        self.catalog
            .as_ref()
            .or(config.catalog.path.as_ref())
            .map(ConfigPath::as_path)
    }

    /// Fold command-line overrides into the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(refresh) = self.refresh {
            config.display.refresh_interval_ms = refresh;
        }
        if self.no_toggle {
            config.display.toggle_enabled = false;
        }
        if self.no_final {
            config.display.show_final_table = false;
        }
    }
}
