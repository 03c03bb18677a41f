//! Check-update command implementation for mediasort
//!
//! This module queries the release feed and prints the version banner.

use crate::{
    config::Config,
    error::Result,
    update::{UpdateChecker, fetch_latest_release},
};
use log::info;

/// Check-update command implementation
pub struct CheckUpdateCommand<'a> {
    _args: &'a super::super::CheckUpdate,
}

impl<'a> CheckUpdateCommand<'a> {
    /// Create a new check-update command
    pub fn new(args: &'a super::super::CheckUpdate) -> Self {
        Self { _args: args }
    }

    /// Execute the check-update command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let checker = UpdateChecker::from_config(config);
        let status = checker
            .check(
                config.local_version.as_deref(),
                config.allow_update_check,
                || fetch_latest_release(&config.release_api_url, config.update_timeout_duration()),
            )
            .await;

        if status.is_none() {
            info!("Not a release build, skipping update check");
        }
        Ok(())
    }
}
