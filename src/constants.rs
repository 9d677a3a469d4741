//! Central constants for the sync-settings application

/// Default values for Gist API operations
pub mod github {
    /// Root of the Gist REST API
    pub const GISTS_API_BASE: &str = "https://api.github.com/gists";

    /// Media type requested from the API
    pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("sync-settings/", env!("CARGO_PKG_VERSION"));

    /// Environment variable consulted when no token is configured
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Page describing how to create a token with the `gist` scope
    pub const TOKEN_HELP_URL: &str =
        "https://help.github.com/articles/creating-a-personal-access-token-for-the-command-line/";
}

/// Default values for configuration
pub mod config {
    /// Default settings file name
    pub const DEFAULT_SETTINGS_FILE: &str = "sync-settings.yaml";

    /// Default version metadata file, relative to the synced directory
    pub const DEFAULT_VERSION_FILE: &str = ".sync-settings-version.json";

    /// Separator replacing `/` when nested paths are flattened into gist file names
    pub const PATH_SEPARATOR: &str = "__";
}
