//! Release feed access for mediasort
//!
//! This module describes the latest published release and knows how to
//! fetch it and how to read its version.

use crate::{
    error::{Error, Result},
    utils::get_json,
};
use semver::Version;
use serde::Deserialize;
use std::time::Duration;

/// Latest published release, as described by the release feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    /// Version tag, such as `v1.2.3`
    pub tag_name: String,
    /// Publication time as an RFC 3339 UTC timestamp
    pub published_at: String,
    /// Release notes in Markdown
    #[serde(default)]
    pub body: Option<String>,
}

/// Fetches the latest release descriptor
///
/// # Arguments
/// * `api_url` - Endpoint of the release feed
/// * `timeout` - Upper bound for the whole request
pub async fn fetch_latest_release(api_url: &str, timeout: Duration) -> Result<ReleaseInfo> {
    get_json(api_url, timeout).await
}

/// Parses a semantic version, accepting a leading `v`
pub fn parse_version(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let bare = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
    Version::parse(bare).map_err(|source| Error::VersionParseError {
        version: version.to_string(),
        source,
    })
}
