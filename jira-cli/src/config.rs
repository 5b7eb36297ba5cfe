// ABOUTME: Credential loading for the Jira task manager
// ABOUTME: Reads JIRA_URL, USERNAME, and API_TOKEN from the environment

use anyhow::{Result, bail};
use std::env;

pub const ENV_JIRA_URL: &str = "JIRA_URL";
pub const ENV_USERNAME: &str = "USERNAME";
pub const ENV_API_TOKEN: &str = "API_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub jira_url: String,
    pub username: String,
    pub api_token: String,
}

impl Credentials {
    /// Read credentials from the process environment. Call after any `.env`
    /// file has been loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            env::var(ENV_JIRA_URL).ok(),
            env::var(ENV_USERNAME).ok(),
            env::var(ENV_API_TOKEN).ok(),
        )
    }

    fn from_values(
        jira_url: Option<String>,
        username: Option<String>,
        api_token: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();

        let jira_url = required(jira_url, ENV_JIRA_URL, &mut missing);
        let username = required(username, ENV_USERNAME, &mut missing);
        let api_token = required(api_token, ENV_API_TOKEN, &mut missing);

        if !missing.is_empty() {
            bail!("missing environment variables: {}", missing.join(", "));
        }

        Ok(Self {
            jira_url,
            username,
            api_token,
        })
    }
}

/// Empty and whitespace-only values count as missing.
fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
