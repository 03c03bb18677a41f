//! CLI command implementations for mediasort
//!
//! This module contains the implementation of CLI commands including
//! update checking, title cleanup, folder selection and shutdown.

mod check_update;
mod select_dir;
mod shutdown;
mod trim_title;

pub use check_update::CheckUpdateCommand;
pub use select_dir::SelectDirCommand;
pub use shutdown::ShutdownCommand;
pub use trim_title::TrimTitleCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check the release feed and print the version banner
    CheckUpdate(super::CheckUpdate),

    /// Strip trailing actor names from a scene title
    TrimTitle(super::TrimTitle),

    /// Resolve the folder to organize
    SelectDir(super::SelectDir),

    /// Count down and power the machine off
    Shutdown(super::Shutdown),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = cli.build_config();
        self.setup_log(&config);
        match self {
            Self::CheckUpdate(check) => CheckUpdateCommand::new(check).run(&config).await?,
            Self::TrimTitle(trim) => TrimTitleCommand::new(trim).run(&config)?,
            Self::SelectDir(select) => SelectDirCommand::new(select).run(&config)?,
            Self::Shutdown(shutdown) => ShutdownCommand::new(shutdown).run(&config).await?,
        }
        Ok(())
    }

    /// Setup logging configuration
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if let Ok(mediasort_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match mediasort_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => config.log_level,
            }
        } else {
            config.log_level
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
