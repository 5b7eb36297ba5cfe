// ABOUTME: Custom error types for the Jira SDK with user-friendly messages
// ABOUTME: Provides specific error handling for different Jira API failure modes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Authentication failed. Check USERNAME and API_TOKEN")]
    Auth,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Jira returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response format")]
    InvalidResponse,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl JiraError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            JiraError::Auth => {
                Some("Create an API token at: https://id.atlassian.com/manage-profile/security/api-tokens")
            }
            JiraError::NotFound(_) => {
                Some("Check the task key format (e.g., TASK-1) or the board id")
            }
            JiraError::Network(_) => Some("Check your internet connection and try again"),
            JiraError::RateLimit => Some("Wait a moment before making another request"),
            JiraError::Timeout => Some("Try again or check your network connection"),
            JiraError::Configuration(_) => {
                Some("Set JIRA_URL, USERNAME and API_TOKEN in the environment or a .env file")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JiraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JiraError::Timeout
        } else if err.is_decode() {
            JiraError::InvalidResponse
        } else if err.is_status() {
            if let Some(status) = err.status() {
                match status.as_u16() {
                    401 | 403 => JiraError::Auth,
                    429 => JiraError::RateLimit,
                    _ => JiraError::Network(err.to_string()),
                }
            } else {
                JiraError::Network(err.to_string())
            }
        } else {
            JiraError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JiraError {
    fn from(_err: serde_json::Error) -> Self {
        JiraError::InvalidResponse
    }
}
