//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the artwork API
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Rows per page, fixed for the lifetime of the app
pub const PAGE_SIZE: u64 = 12;

/// Number of numbered page links shown in the pager
pub const PAGE_LINK_SIZE: u64 = 5;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file, written in the working directory
pub const DEFAULT_LOG_FILE: &str = "artwork-browser.log";

/// Name of the per-user config directory under `$HOME`
pub const CONFIG_DIR_NAME: &str = ".artwork-browser";

/// Config file inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Cell text for a missing inscription
pub const MISSING_INSCRIPTION: &str = "N/A";

/// Cell text for a missing start or end year
pub const MISSING_YEAR: &str = "undefined";

/// Alert shown when the count form is submitted without a number
pub const ALERT_ENTER_NUMBER: &str = "Please enter a number";

/// Application name
pub const APP_NAME: &str = "Artwork Browser";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
