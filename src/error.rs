use std::fmt;

/// Errors that can happen inside mediasort
#[derive(Debug)]
pub enum Error {
    // Scan directory errors
    /// The configured folder to organize does not exist or is not a directory
    InvalidDirectory {
        /// The configured path
        path: String,
        /// Additional context about the check
        context: String,
    },
    /// The user closed the folder dialog without choosing a folder
    DirectorySelectionCancelled,

    // Release feed errors
    /// Failed to query the release feed
    ReleaseFetchFailed {
        /// The endpoint that was queried
        url: String,
        /// The underlying HTTP error
        source: reqwest::Error,
    },
    /// The release feed answered with a non-success status
    ReleaseStatusError {
        /// The endpoint that was queried
        url: String,
        /// The HTTP status code
        status: u16,
    },
    /// The release feed answered with an unexpected document
    ReleaseParseError {
        /// The endpoint that was queried
        url: String,
        /// The underlying decoding error
        source: reqwest::Error,
    },
    /// A version string is not a semantic version
    VersionParseError {
        /// The offending version string
        version: String,
        /// The underlying semver error
        source: semver::Error,
    },
    /// The release timestamp is not RFC 3339
    ReleaseDateParseError {
        /// The offending timestamp
        value: String,
        /// The underlying chrono error
        source: chrono::ParseError,
    },
    /// The release notes could not be turned into a changelog
    ChangelogUnavailable {
        /// Why the changelog is missing
        reason: String,
    },

    // Power errors
    /// The platform shutdown command could not be run or failed
    ShutdownFailed {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDirectory { path, context } => {
                write!(f, "Invalid folder to organize '{path}': {context}")
            }
            Error::DirectorySelectionCancelled => write!(f, "No folder was selected"),
            Error::ReleaseFetchFailed { url, source } => {
                write!(f, "Failed to fetch release info from '{url}': {source}")
            }
            Error::ReleaseStatusError { url, status } => {
                write!(f, "Release feed '{url}' answered with HTTP {status}")
            }
            Error::ReleaseParseError { url, source } => {
                write!(f, "Failed to parse release info from '{url}': {source}")
            }
            Error::VersionParseError { version, source } => {
                write!(f, "Invalid version '{version}': {source}")
            }
            Error::ReleaseDateParseError { value, source } => {
                write!(f, "Invalid release timestamp '{value}': {source}")
            }
            Error::ChangelogUnavailable { reason } => {
                write!(f, "Changelog unavailable: {reason}")
            }
            Error::ShutdownFailed { reason } => write!(f, "Failed to shut down: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReleaseFetchFailed { source, .. } => Some(source),
            Error::ReleaseParseError { source, .. } => Some(source),
            Error::VersionParseError { source, .. } => Some(source),
            Error::ReleaseDateParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
