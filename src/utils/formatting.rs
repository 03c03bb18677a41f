//! Formatting utilities for mediasort
//!
//! This module provides functions for measuring and aligning console text
//! that mixes Latin and CJK characters.

use std::ops::RangeInclusive;

/// CJK Unified Ideographs occupying two terminal columns
const WIDE_CHARS: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Returns the number of terminal columns a string occupies
///
/// Every character counts one column, CJK ideographs count two.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if WIDE_CHARS.contains(&c) { 2 } else { 1 })
        .sum()
}

/// Centers a string within `total_width` columns by prepending spaces
///
/// # Arguments
/// * `text` - The string to center
/// * `total_width` - Width of the area in columns
///
/// # Returns
/// Returns the padded string, or the string unchanged if it is already wider
/// than `total_width`
pub fn align_center(text: &str, total_width: usize) -> String {
    let padding = total_width.saturating_sub(display_width(text)) / 2;
    format!("{}{text}", " ".repeat(padding))
}
