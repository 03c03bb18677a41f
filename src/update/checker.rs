//! Update checking for mediasort
//!
//! This module compares the running version against the latest published
//! release and prints a version banner describing the outcome.

use super::{
    banner::{Banner, BannerLine},
    release::{ReleaseInfo, parse_version},
};
use crate::{
    config::{
        ALREADY_LATEST_MSG, CHANGELOG_HEADING_PREFIX, CHANGELOG_ITEM_PREFIX, CHECK_FAILED_MSG,
        CHECKING_UPDATE_MSG, CLEAR_LINE, Config,
    },
    error::{Error, Result},
    utils::utc_to_local_date,
};
use chrono::NaiveDate;
use log::debug;
use std::future::Future;
use std::io::Write;

/// Outcome of a single update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Checking was turned off by the user
    Disallowed,
    /// The running version is not older than the latest release
    AlreadyLatest,
    /// The release feed could not be queried or understood
    CheckFailed,
    /// A newer release is published
    NewVersionAvailable {
        /// Tag of the newer release
        latest: String,
        /// Local date the release was published
        release_date: NaiveDate,
        /// Release notes, if any
        body: Option<String>,
    },
}

/// Checks for newer releases and renders the version banner
#[derive(Debug, Clone)]
pub struct UpdateChecker {
    product_name: String,
    release_page_url: String,
}

impl UpdateChecker {
    /// Creates a checker for the given product
    pub fn new(product_name: impl Into<String>, release_page_url: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            release_page_url: release_page_url.into(),
        }
    }

    /// Creates a checker from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.product_name, &config.release_page_url)
    }

    /// Runs the update check and prints the version banner
    ///
    /// Nothing happens when `local_version` is absent, which is the case for
    /// builds that are not releases. Failures while fetching or reading the
    /// release are logged at debug level and reported as
    /// [`UpdateStatus::CheckFailed`].
    ///
    /// # Arguments
    /// * `local_version` - Version of the running build
    /// * `allow_check` - Whether the release feed may be queried
    /// * `fetch` - Produces the latest release descriptor
    ///
    /// # Returns
    /// Returns the status the banner was rendered for, or None if no check ran
    pub async fn check<F, Fut>(
        &self,
        local_version: Option<&str>,
        allow_check: bool,
        fetch: F,
    ) -> Option<UpdateStatus>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ReleaseInfo>>,
    {
        let local_version = local_version.filter(|version| !version.is_empty())?;

        let status = if allow_check {
            print!("{CHECKING_UPDATE_MSG}");
            let _ = std::io::stdout().flush();

            let status = match fetch()
                .await
                .and_then(|release| evaluate_release(local_version, release))
            {
                Ok(status) => status,
                Err(e) => {
                    debug!("Error while checking for updates: {e}");
                    UpdateStatus::CheckFailed
                }
            };
            print!("{CLEAR_LINE}");
            status
        } else {
            UpdateStatus::Disallowed
        };

        print!("{}", self.banner(local_version, &status));
        let _ = std::io::stdout().flush();
        Some(status)
    }

    /// Builds the banner describing `status`
    pub fn banner(&self, local_version: &str, status: &UpdateStatus) -> Banner {
        let version_title = format!("{}: {local_version}", self.product_name);

        match status {
            UpdateStatus::Disallowed => Banner::new([version_title]),
            UpdateStatus::AlreadyLatest => {
                Banner::new([format!("{version_title} {ALREADY_LATEST_MSG}")])
            }
            UpdateStatus::CheckFailed => Banner::new([version_title]).with_info(vec![
                BannerLine::Text(CHECK_FAILED_MSG.to_string()),
                BannerLine::Text(format!("  {}", self.release_page_url)),
            ]),
            UpdateStatus::NewVersionAvailable {
                latest,
                release_date,
                body,
            } => {
                let banner = Banner::new([
                    version_title,
                    format!("↓ New version available: {latest} ↓"),
                    self.release_page_url.clone(),
                ]);
                match extract_changelog(*release_date, body.as_deref()) {
                    Ok(changelog) => banner.with_info(changelog),
                    Err(e) => {
                        debug!("Showing version banner without changelog: {e}");
                        banner
                    }
                }
            }
        }
    }
}

/// Compares the running version against a fetched release
///
/// # Returns
/// Returns [`UpdateStatus::NewVersionAvailable`] or
/// [`UpdateStatus::AlreadyLatest`], or an error if a version or the release
/// timestamp cannot be parsed
pub fn evaluate_release(local_version: &str, release: ReleaseInfo) -> Result<UpdateStatus> {
    let local = parse_version(local_version)?;
    let latest = parse_version(&release.tag_name)?;
    let release_date = utc_to_local_date(&release.published_at)?;

    if local < latest {
        Ok(UpdateStatus::NewVersionAvailable {
            latest: release.tag_name,
            release_date,
            body: release.body,
        })
    } else {
        Ok(UpdateStatus::AlreadyLatest)
    }
}

/// Turns release notes into banner info lines
///
/// The first line carries the release date. Level-2 headings become bold
/// lines, list items are kept verbatim and everything else is dropped.
pub fn extract_changelog(release_date: NaiveDate, body: Option<&str>) -> Result<Vec<BannerLine>> {
    let body = body.ok_or_else(|| Error::ChangelogUnavailable {
        reason: "release has no notes".to_string(),
    })?;

    let mut changelog = vec![BannerLine::Text(format!("Released: {release_date}"))];
    for line in body.lines() {
        if let Some(heading) = line.strip_prefix(CHANGELOG_HEADING_PREFIX) {
            changelog.push(BannerLine::Heading(heading.to_string()));
        } else if line.starts_with(CHANGELOG_ITEM_PREFIX) {
            changelog.push(BannerLine::Text(line.to_string()));
        }
    }
    Ok(changelog)
}
