// ABOUTME: Centralized constants for the Jira SDK
// ABOUTME: Contains endpoint paths, timeouts, and the client user agent

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Jira REST endpoint paths, joined onto the configured base URL
pub mod paths {
    /// Agile API board listing
    pub const AGILE_BOARDS: &str = "/rest/agile/1.0/board";

    /// JQL issue search
    pub const SEARCH: &str = "/rest/api/2/search";

    /// Issue CRUD prefix; `/{key}`, `/{key}/transitions` and `/{key}/comment`
    /// hang off this
    pub const ISSUE: &str = "/rest/api/2/issue";
}

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("jira-tasks/", env!("CARGO_PKG_VERSION"));
