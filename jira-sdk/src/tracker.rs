// ABOUTME: IssueTracker capability trait abstracting the remote Jira client
// ABOUTME: The one seam that lets commands run against a test double

use crate::Result;
use crate::types::{Board, Issue, NewTask, Transition};

/// The narrow capability set the command dispatcher needs from the remote
/// tracker. Implemented by [`crate::JiraClient`] and by test doubles.
pub trait IssueTracker {
    /// Fetch all boards visible to the authenticated user.
    fn boards(&self) -> Result<Vec<Board>>;

    /// Fetch the issues belonging to a board's project.
    fn search_issues(&self, board_id: &str) -> Result<Vec<Issue>>;

    /// Fetch a single issue by key.
    fn issue(&self, key: &str) -> Result<Issue>;

    /// Create an issue and return its newly assigned key.
    fn create_issue(&self, task: &NewTask) -> Result<String>;

    /// List the workflow transitions currently available for an issue.
    fn transitions(&self, key: &str) -> Result<Vec<Transition>>;

    /// Execute a transition by id.
    fn apply_transition(&self, key: &str, transition_id: &str) -> Result<()>;

    /// Attach a free-text comment to an issue.
    fn add_comment(&self, key: &str, body: &str) -> Result<()>;

    /// Move `key` toward `target` by applying the first available transition
    /// whose name contains `target`, case-insensitively. Returns `Ok(false)`
    /// when no name matches; the apply step is skipped in that case.
    fn transition_to(&self, key: &str, target: &str) -> Result<bool> {
        let wanted = target.to_lowercase();
        for transition in self.transitions(key)? {
            if transition.name.to_lowercase().contains(&wanted) {
                self.apply_transition(key, &transition.id)?;
                return Ok(true);
            }
        }
        Ok(false)
    }
}
