//! Select-dir command implementation for mediasort
//!
//! This module resolves the folder to organize, falling back to the folder
//! dialog when the configured one is unusable.

use crate::{
    config::Config,
    error::{Error, Result},
    media::{get_scan_dir, prompt_for_scan_dir},
};
use log::{error, info};

/// Select-dir command implementation
pub struct SelectDirCommand<'a> {
    _args: &'a super::super::SelectDir,
}

impl<'a> SelectDirCommand<'a> {
    /// Create a new select-dir command
    pub fn new(args: &'a super::super::SelectDir) -> Self {
        Self { _args: args }
    }

    /// Execute the select-dir command
    pub fn run(&self, config: &Config) -> Result<()> {
        let scan_dir = match get_scan_dir(config.scan_dir.as_deref()) {
            Ok(dir) => dir,
            Err(e @ Error::InvalidDirectory { .. }) => {
                error!("{e}");
                prompt_for_scan_dir()?
            }
            Err(e) => return Err(e),
        };

        info!("Folder to organize: {}", scan_dir.display());
        Ok(())
    }
}
