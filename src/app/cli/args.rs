//! Command line arguments
//!
//! Holds the clap definition and the small amount of logic that turns raw
//! flags into effective settings (color, log level, repository directory).

use crate::report::ReportFormat;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "plugin-version")]
#[command(about = "Resolve the build version of a Lavalink plugin from git")]
#[command(version)]
#[command(
    after_help = "A commit with an exact tag is a release; any other commit is a snapshot named by its short hash."
)]
pub struct Args {
    /// Repository to resolve (default: current directory)
    #[arg(short = 'r', long = "repo", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Git executable to run
    #[arg(long = "git", value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Build manifest file (TOML)
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Report format
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FORMAT",
        value_parser = ReportFormat::NAMES
    )]
    pub output: Option<String>,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Include manifest details in text output and log progress
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print build information of this tool and exit
    #[arg(long = "build-info")]
    pub build_info: bool,
}

impl Args {
    /// Repository directory, defaulting to the current directory
    pub fn repository_dir(&self) -> &Path {
        self.repository.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Git executable, defaulting to `git` on `PATH`
    pub fn git_binary(&self) -> &Path {
        self.git.as_deref().unwrap_or_else(|| Path::new("git"))
    }

    pub fn report_format(&self) -> Result<ReportFormat, String> {
        match &self.output {
            Some(name) => name.parse(),
            None => Ok(ReportFormat::default()),
        }
    }

    /// Explicit flags win, otherwise [`auto_color`] decides
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            auto_color()
        }
    }

    /// Explicit `--log-level`, else `info` when verbose, else the quiet default
    pub fn effective_log_level(&self) -> &str {
        match (&self.log_level, self.verbose) {
            (Some(level), _) => level.as_str(),
            (None, true) => "info",
            (None, false) => crate::core::logging::DEFAULT_LOG_LEVEL,
        }
    }
}

/// Color when stdout is a terminal and `NO_COLOR` is unset or empty
pub fn auto_color() -> bool {
    color_for(
        std::env::var_os("NO_COLOR").as_deref(),
        std::io::IsTerminal::is_terminal(&std::io::stdout()),
    )
}

pub(crate) fn color_for(no_color: Option<&std::ffi::OsStr>, is_terminal: bool) -> bool {
    let disabled = no_color.is_some_and(|value| !value.is_empty());
    is_terminal && !disabled
}

