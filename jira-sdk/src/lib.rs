// ABOUTME: Jira SDK library providing a blocking REST client with basic auth
// ABOUTME: Exposes the IssueTracker seam, wire types, and typed errors

use log::{debug, warn};
use reqwest::blocking::{RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

mod builder;
pub mod constants;
mod error;
#[cfg(test)]
mod test_helpers;
mod tracker;
mod types;

pub use builder::{JiraClientConfig, JiraClientConfigBuilder};
pub use error::JiraError;
pub use tracker::IssueTracker;
pub use types::{Board, Issue, IssueFields, IssueType, NewTask, Status, Transition, User};

use types::{BoardsResponse, CreatedIssue, SearchResponse, TransitionsResponse};

pub type Result<T, E = JiraError> = std::result::Result<T, E>;

/// Blocking client for a Jira instance, authenticated with HTTP basic auth.
/// Each operation is one round trip; there is no retry or caching layer.
pub struct JiraClient {
    client: reqwest::blocking::Client,
    base_url: String,
    username: String,
    api_token: SecretString,
}

#[derive(Serialize)]
struct CreateIssueRequest<'a> {
    fields: CreateIssueFields<'a>,
}

#[derive(Serialize)]
struct CreateIssueFields<'a> {
    project: IdRef<'a>,
    summary: &'a str,
    description: &'a str,
    issuetype: NameRef<'a>,
}

#[derive(Serialize)]
struct TransitionRequest<'a> {
    transition: IdRef<'a>,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct IdRef<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct NameRef<'a> {
    name: &'a str,
}

impl JiraClient {
    pub(crate) fn from_config(config: JiraClientConfig) -> Result<Self> {
        let url = Url::parse(&config.base_url)
            .map_err(|e| JiraError::Configuration(format!("Invalid Jira URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(JiraError::Configuration(format!(
                "Invalid Jira URL: unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            api_token: config.api_token,
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.username, Some(self.api_token.expose_secret()))
    }

    fn post(&self, url: &str) -> RequestBuilder {
        self.client
            .post(url)
            .basic_auth(&self.username, Some(self.api_token.expose_secret()))
    }

    fn issue_url(&self, key: &str) -> String {
        format!("{}{}/{key}", self.base_url, constants::paths::ISSUE)
    }

    /// Map non-success statuses to typed errors; `what` names the resource
    /// for 404s.
    fn check(response: Response, what: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        warn!("jira returned {status} for {what}");
        Err(match status.as_u16() {
            401 | 403 => JiraError::Auth,
            404 => JiraError::NotFound(what.to_string()),
            429 => JiraError::RateLimit,
            code => JiraError::Api {
                status: code,
                body: body_snippet(response),
            },
        })
    }
}

impl IssueTracker for JiraClient {
    fn boards(&self) -> Result<Vec<Board>> {
        let url = format!("{}{}", self.base_url, constants::paths::AGILE_BOARDS);
        debug!("GET {url}");
        let response = Self::check(self.get(&url).send()?, "Board list")?;
        let body: BoardsResponse = response.json()?;
        Ok(body.values)
    }

    fn search_issues(&self, board_id: &str) -> Result<Vec<Issue>> {
        let url = format!("{}{}", self.base_url, constants::paths::SEARCH);
        let jql = format!("project={board_id}");
        debug!("GET {url} jql={jql}");
        let response = self.get(&url).query(&[("jql", jql.as_str())]).send()?;
        let response = Self::check(response, &format!("Board {board_id}"))?;
        let body: SearchResponse = response.json()?;
        Ok(body.issues)
    }

    fn issue(&self, key: &str) -> Result<Issue> {
        let url = self.issue_url(key);
        debug!("GET {url}");
        let response = Self::check(self.get(&url).send()?, &format!("Issue {key}"))?;
        Ok(response.json()?)
    }

    fn create_issue(&self, task: &NewTask) -> Result<String> {
        let url = format!("{}{}", self.base_url, constants::paths::ISSUE);
        debug!("POST {url}");
        let request = CreateIssueRequest {
            fields: CreateIssueFields {
                project: IdRef { id: &task.board_id },
                summary: &task.summary,
                description: &task.description,
                issuetype: NameRef {
                    name: &task.issue_type,
                },
            },
        };
        let response = self.post(&url).json(&request).send()?;
        let response = Self::check(response, &format!("Board {}", task.board_id))?;
        let created: CreatedIssue = response.json()?;
        Ok(created.key)
    }

    fn transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let url = format!("{}/transitions", self.issue_url(key));
        debug!("GET {url}");
        let response = Self::check(self.get(&url).send()?, &format!("Issue {key}"))?;
        let body: TransitionsResponse = response.json()?;
        Ok(body.transitions)
    }

    fn apply_transition(&self, key: &str, transition_id: &str) -> Result<()> {
        let url = format!("{}/transitions", self.issue_url(key));
        debug!("POST {url} transition={transition_id}");
        let request = TransitionRequest {
            transition: IdRef { id: transition_id },
        };
        let response = self.post(&url).json(&request).send()?;
        Self::check(response, &format!("Issue {key}"))?;
        Ok(())
    }

    fn add_comment(&self, key: &str, body: &str) -> Result<()> {
        let url = format!("{}/comment", self.issue_url(key));
        debug!("POST {url}");
        let request = CommentRequest { body };
        let response = self.post(&url).json(&request).send()?;
        Self::check(response, &format!("Issue {key}"))?;
        Ok(())
    }
}

fn body_snippet(response: Response) -> String {
    let body = response.text().unwrap_or_default();
    let trimmed = body.trim();
    if trimmed.chars().count() <= 200 {
        trimmed.to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
