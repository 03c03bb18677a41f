//! Media library helpers for mediasort
//!
//! This module provides the pieces of the organizer that deal with the
//! library itself:
//! - Choosing the folder to organize
//! - Cleaning up scraped scene titles

pub mod scan_dir;
pub mod title;

pub use scan_dir::{get_scan_dir, prompt_for_scan_dir, select_folder};
pub use title::remove_trailing_actors;
