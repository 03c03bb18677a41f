//! Trim-title command implementation for mediasort

use crate::{config::Config, error::Result, media::remove_trailing_actors};

/// Trim-title command implementation
pub struct TrimTitleCommand<'a> {
    args: &'a super::super::TrimTitle,
}

impl<'a> TrimTitleCommand<'a> {
    /// Create a new trim-title command
    pub fn new(args: &'a super::super::TrimTitle) -> Self {
        Self { args }
    }

    /// Execute the trim-title command
    pub fn run(&self, _config: &Config) -> Result<()> {
        println!(
            "{}",
            remove_trailing_actors(&self.args.title, &self.args.actors)
        );
        Ok(())
    }
}
