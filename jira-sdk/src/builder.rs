// ABOUTME: Builder pattern implementation for JiraClient configuration
// ABOUTME: Provides type-safe configuration with compile-time required fields

use crate::JiraClient;
use crate::constants::timeouts;
use crate::error::JiraError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<JiraClient, JiraError>))]
pub struct JiraClientConfig {
    /// Base URL of the Jira instance, e.g. `https://company.atlassian.net`
    #[builder(setter(into))]
    pub base_url: String,

    /// Account username or email for basic auth
    #[builder(setter(into))]
    pub username: String,

    /// API token paired with the username
    pub api_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,
}

impl From<JiraClientConfig> for Result<JiraClient, JiraError> {
    fn from(config: JiraClientConfig) -> Self {
        JiraClient::from_config(config)
    }
}

impl JiraClient {
    pub fn builder() -> JiraClientConfigBuilder<((), (), (), ())> {
        JiraClientConfig::builder()
    }
}
