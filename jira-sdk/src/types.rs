// ABOUTME: Wire types for the subset of the Jira REST API the client consumes
// ABOUTME: Boards and issues come from the agile and core search/issue endpoints

use serde::{Deserialize, Serialize};

/// A named collection of tasks (agile API `GET /rest/agile/1.0/board`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardsResponse {
    #[serde(default)]
    pub values: Vec<Board>,
}

/// A single issue as returned by the search and issue endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub issuetype: Option<IssueType>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub assignee: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Status {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IssueType {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A workflow step offered by Jira for a specific issue.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

/// Input for creating an issue on a board.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub board_id: String,
    pub summary: String,
    pub description: String,
    pub issue_type: String,
}
