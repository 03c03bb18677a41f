//! Command line interface for mediasort
//!
//! This module wires the support utilities to subcommands.

mod args;
mod commands;

pub use args::{CheckUpdate, Cli, SelectDir, Shutdown, TrimTitle};
pub use commands::{
    CheckUpdateCommand, Commands, SelectDirCommand, ShutdownCommand, TrimTitleCommand,
};
