//! Support utilities for a local media organizer
//!
//! mediasort bundles the small pieces an organizer run needs around the
//! actual scraping: choosing the folder to organize, cleaning up scene
//! titles, printing width-aware console banners, checking the release feed
//! for newer versions and powering off once done.

pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod power;
pub mod update;
pub mod utils;

pub use error::{Error, Result};
pub use media::{get_scan_dir, remove_trailing_actors, select_folder};
pub use update::{UpdateChecker, UpdateStatus};
pub use utils::{align_center, display_width};
