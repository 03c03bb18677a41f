//! Utility functions and helpers for mediasort
//!
//! This module provides various utility functions organized by functionality:
//! - Text measuring and alignment for mixed-width console output
//! - Release timestamp conversion
//! - HTTP retrieval with bounded timeouts

pub mod formatting;
pub mod network;
pub mod time;

pub use formatting::{align_center, display_width};
pub use network::get_json;
pub use time::utc_to_local_date;
