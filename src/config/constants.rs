//! Configuration constants for mediasort
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Product Constants
// =============================================================================

/// Product name shown in the version banner
pub const DEFAULT_PRODUCT_NAME: &str = "mediasort";

/// Compile-time variable carrying the version of a release build
///
/// Development builds leave it unset, which disables the update check.
pub const RELEASE_VERSION: Option<&str> = option_env!("MEDIASORT_RELEASE_VERSION");

// =============================================================================
// Network and Release Feed Constants
// =============================================================================

/// GitHub API endpoint describing the latest published release
pub const DEFAULT_RELEASE_API_URL: &str =
    "https://api.github.com/repos/mediasort/mediasort/releases/latest";

/// Human-facing page of the latest published release
pub const DEFAULT_RELEASE_PAGE_URL: &str = "https://github.com/mediasort/mediasort/releases/latest";

/// Timeout for the release feed request in seconds
pub const DEFAULT_UPDATE_TIMEOUT: u64 = 3;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("mediasort/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Console Constants
// =============================================================================

/// Returns the cursor to the start of the line and clears it
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// Columns added to the widest banner line
pub const BANNER_MARGIN: usize = 6;

/// Heading marker recognised in release notes
pub const CHANGELOG_HEADING_PREFIX: &str = "## ";

/// List item marker recognised in release notes
pub const CHANGELOG_ITEM_PREFIX: &str = "- ";

// =============================================================================
// Title Constants
// =============================================================================

/// Characters accepted between a title and a trailing actor name
pub const TITLE_ACTOR_DELIMITERS: &str = "-xX &·,;　＆・，；";

// =============================================================================
// Shutdown Constants
// =============================================================================

/// Default countdown before powering off, in seconds
pub const DEFAULT_SHUTDOWN_TIMEOUT: u64 = 120;

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "MEDIASORT_LOG";

// =============================================================================
// Messages
// =============================================================================

/// Progress message printed while the release feed is queried
pub const CHECKING_UPDATE_MSG: &str = "Checking for updates...";

/// Suffix appended to the version title when no newer release exists
pub const ALREADY_LATEST_MSG: &str = "(up to date)";

/// Info line printed when the release feed could not be queried
pub const CHECK_FAILED_MSG: &str =
    "Failed to check for updates, visit the following page for the latest version:";

/// Prompt printed before the folder dialog opens
pub const SELECT_FOLDER_PROMPT: &str = "Select the folder to organize: ";

/// Title of the folder dialog window
pub const SELECT_FOLDER_DIALOG_TITLE: &str = "Select the folder to organize";
