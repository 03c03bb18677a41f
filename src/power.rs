//! Powering off after a run
//!
//! The organizer can turn the machine off once it is done. A visible
//! countdown gives the user the chance to cancel with Ctrl+C.

use crate::{
    config::CLEAR_LINE,
    error::{Error, Result},
};
use log::info;
use std::io::Write;
use std::time::Duration;
use tokio::{process::Command, signal, time::sleep};

/// Counts down on the console, one line update per second
///
/// # Arguments
/// * `seconds` - Length of the countdown
///
/// # Returns
/// Returns true when the countdown ran out, false when the user cancelled it
pub async fn countdown(seconds: u64) -> bool {
    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    for remaining in (0..seconds).rev() {
        print!(
            "{CLEAR_LINE}Organizing finished, shutting down in {remaining} seconds. Press Ctrl+C to cancel"
        );
        let _ = std::io::stdout().flush();

        tokio::select! {
            _ = &mut ctrl_c => {
                println!();
                info!("Shutdown cancelled");
                return false;
            }
            _ = sleep(Duration::from_secs(1)) => {}
        }
    }

    if seconds > 0 {
        println!();
    }
    true
}

/// Counts down and then powers the machine off
pub async fn shutdown(seconds: u64) -> Result<()> {
    if !countdown(seconds).await {
        return Ok(());
    }

    info!("Organizing finished, shutting down");
    let (program, args) = shutdown_command();
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| Error::ShutdownFailed {
            reason: format!("cannot run '{program}': {e}"),
        })?;

    if !status.success() {
        return Err(Error::ShutdownFailed {
            reason: format!("'{program}' exited with {status}"),
        });
    }
    Ok(())
}

#[cfg(windows)]
const SHUTDOWN_ARGS: &[&str] = &["/s"];
#[cfg(not(windows))]
const SHUTDOWN_ARGS: &[&str] = &["-h", "now"];

/// Platform command that powers the machine off
pub fn shutdown_command() -> (&'static str, &'static [&'static str]) {
    ("shutdown", SHUTDOWN_ARGS)
}
