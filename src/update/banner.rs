//! Console banners for mediasort
//!
//! A banner is a block framed by `=` rules: centered title lines, then an
//! optional `-` rule followed by left-aligned info lines.

use crate::{
    config::BANNER_MARGIN,
    utils::{align_center, display_width},
};
use crossterm::style::Stylize;
use std::fmt;

/// A left-aligned line below the banner titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerLine {
    /// Printed verbatim
    Text(String),
    /// Printed in bold
    Heading(String),
}

impl BannerLine {
    /// Plain text of the line, without styling
    pub fn text(&self) -> &str {
        match self {
            BannerLine::Text(text) | BannerLine::Heading(text) => text,
        }
    }
}

impl fmt::Display for BannerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerLine::Text(text) => write!(f, "{text}"),
            BannerLine::Heading(text) => write!(f, "{}", text.as_str().bold()),
        }
    }
}

/// Framed block of centered titles and left-aligned info lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Banner {
    titles: Vec<String>,
    info: Vec<BannerLine>,
}

impl Banner {
    /// Creates a banner with the given title lines
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            info: Vec::new(),
        }
    }

    /// Adds info lines below the titles
    pub fn with_info(mut self, info: Vec<BannerLine>) -> Self {
        self.info.extend(info);
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn info(&self) -> &[BannerLine] {
        &self.info
    }

    /// Width of the rules, in columns
    pub fn width(&self) -> usize {
        let widest = self
            .titles
            .iter()
            .map(|title| display_width(title))
            .chain(self.info.iter().map(|line| display_width(line.text())))
            .max()
            .unwrap_or(0);
        widest + BANNER_MARGIN
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width();
        let outer_rule = "=".repeat(width);

        writeln!(f, "{outer_rule}")?;
        for title in &self.titles {
            writeln!(f, "{}", align_center(title, width))?;
        }
        if !self.info.is_empty() {
            writeln!(f, "{}", "-".repeat(width))?;
            for line in &self.info {
                writeln!(f, "{line}")?;
            }
        }
        writeln!(f, "{outer_rule}")?;
        writeln!(f)
    }
}
