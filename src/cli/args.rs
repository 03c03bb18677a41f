//! CLI argument parsing for mediasort
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{Config, DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_UPDATE_TIMEOUT};
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Support utilities for a local media organizer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Do not query the release feed for newer versions
    #[arg(long, global = true)]
    pub no_update_check: bool,

    /// Version of the running build (release builds embed it at compile time)
    #[arg(long, value_name = "VERSION", global = true)]
    pub local_version: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments and the selected command
    pub fn build_config(&self) -> Config {
        let config = Config::new()
            .with_log_level(self.log_level)
            .with_update_check(!self.no_update_check)
            .with_local_version(self.local_version.clone());

        match &self.command {
            super::Commands::CheckUpdate(check) => config.with_update_timeout(check.timeout),
            super::Commands::SelectDir(select) => config.with_scan_dir(select.dir.clone()),
            super::Commands::Shutdown(shutdown) => config.with_shutdown_timeout(shutdown.timeout),
            super::Commands::TrimTitle(_) => config,
        }
    }
}

/// Check-update command arguments
#[derive(Args)]
pub struct CheckUpdate {
    /// Time in seconds to wait for the release feed
    #[arg(short, long, default_value_t = DEFAULT_UPDATE_TIMEOUT)]
    pub timeout: u64,
}

/// Trim-title command arguments
#[derive(Args)]
pub struct TrimTitle {
    /// The scene title to clean up
    pub title: String,

    /// Actor name that may trail the title (repeat for several actors, earlier ones win on overlap)
    #[arg(short, long = "actor", value_name = "NAME", required = true)]
    pub actors: Vec<String>,
}

/// Select-dir command arguments
#[derive(Args)]
pub struct SelectDir {
    /// Folder to organize (if not provided, a folder dialog is opened)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Shutdown command arguments
#[derive(Args)]
pub struct Shutdown {
    /// Countdown in seconds before powering off
    #[arg(short, long, default_value_t = DEFAULT_SHUTDOWN_TIMEOUT)]
    pub timeout: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;

    #[test]
    fn test_parse_trim_title() {
        let cli = Cli::parse_from([
            "mediasort",
            "trim-title",
            "Title&ActorA,ActorB",
            "--actor",
            "ActorA",
            "-a",
            "ActorB",
        ]);
        match &cli.command {
            Commands::TrimTitle(trim) => {
                assert_eq!(trim.title, "Title&ActorA,ActorB");
                assert_eq!(trim.actors, ["ActorA", "ActorB"]);
            }
            _ => panic!("expected trim-title"),
        }
    }

    #[test]
    fn test_trim_title_requires_actor() {
        assert!(Cli::try_parse_from(["mediasort", "trim-title", "Title"]).is_err());
    }

    #[test]
    fn test_build_config_for_check_update() {
        let cli = Cli::parse_from([
            "mediasort",
            "--no-update-check",
            "--local-version",
            "v1.0.0",
            "check-update",
            "--timeout",
            "7",
        ]);
        let config = cli.build_config();
        assert!(!config.allow_update_check);
        assert_eq!(config.local_version.as_deref(), Some("v1.0.0"));
        assert_eq!(config.update_timeout, 7);
    }

    #[test]
    fn test_build_config_for_select_dir() {
        let cli = Cli::parse_from(["mediasort", "select-dir", "--dir", "/media/inbox"]);
        let config = cli.build_config();
        assert_eq!(config.scan_dir, Some(PathBuf::from("/media/inbox")));
        assert!(config.allow_update_check);
    }

    #[test]
    fn test_build_config_for_shutdown() {
        let cli = Cli::parse_from(["mediasort", "shutdown", "--log-level", "debug"]);
        let config = cli.build_config();
        assert_eq!(config.shutdown_timeout, DEFAULT_SHUTDOWN_TIMEOUT);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
