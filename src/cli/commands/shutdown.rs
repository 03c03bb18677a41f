//! Shutdown command implementation for mediasort

use crate::{config::Config, error::Result, power};

/// Shutdown command implementation
pub struct ShutdownCommand<'a> {
    _args: &'a super::super::Shutdown,
}

impl<'a> ShutdownCommand<'a> {
    /// Create a new shutdown command
    pub fn new(args: &'a super::super::Shutdown) -> Self {
        Self { _args: args }
    }

    /// Execute the shutdown command
    pub async fn run(&self, config: &Config) -> Result<()> {
        power::shutdown(config.shutdown_timeout).await
    }
}
