//! Configuration module for mediasort
//!
//! This module provides configuration constants, default values, and configuration types
//! for the mediasort support utilities.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
