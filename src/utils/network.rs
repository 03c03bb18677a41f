//! Network utilities for mediasort
//!
//! This module provides the HTTP plumbing shared by the release feed,
//! including client construction and JSON retrieval.

use crate::config::USER_AGENT;
use crate::error::{Error, Result};
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Fetches a JSON document with a bounded request time
///
/// # Arguments
/// * `url` - The endpoint to query
/// * `timeout` - Upper bound for connecting and reading the response
///
/// # Returns
/// Returns the decoded document, or an error describing which stage failed
pub async fn get_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T> {
    let fetch_error = |source: reqwest::Error| Error::ReleaseFetchFailed {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(fetch_error)?;

    debug!("GET {url} (timeout {timeout:?})");
    let response = client.get(url).send().await.map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ReleaseStatusError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| Error::ReleaseParseError {
            url: url.to_string(),
            source,
        })
}
