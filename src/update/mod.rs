//! Release feed and update checking for mediasort
//!
//! This module provides:
//! - The release descriptor and its retrieval
//! - Version comparison and the update status
//! - Framed console banners

pub mod banner;
pub mod checker;
pub mod release;

pub use banner::{Banner, BannerLine};
pub use checker::{UpdateChecker, UpdateStatus, evaluate_release, extract_changelog};
pub use release::{ReleaseInfo, fetch_latest_release, parse_version};
