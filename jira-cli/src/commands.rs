// ABOUTME: The command dispatcher mapping one parsed action to tracker calls
// ABOUTME: Each operation returns the text to print; the prompt is injected

use anyhow::Result;
use jira_sdk::{Board, IssueTracker, NewTask};
use log::debug;

use crate::cli::{Action, TransitionTarget};
use crate::output;

/// Run one action against the tracker and return the text to print. The
/// `prompt` callback asks the user to pick a board when `--useboard` was not
/// given; it receives the fetched board list and returns the chosen id.
pub fn dispatch<T, P>(
    tracker: &T,
    action: Action,
    useboard: Option<String>,
    prompt: P,
) -> Result<String>
where
    T: IssueTracker,
    P: FnOnce(&[Board]) -> Result<String>,
{
    debug!("dispatching {action:?}");
    match action {
        Action::Comment { task_key, body } => comment(tracker, &task_key, &body),
        Action::NewTask {
            summary,
            description,
            issue_type,
        } => create_task(tracker, summary, description, issue_type, useboard, prompt),
        Action::ListTasks { board_id } => {
            Ok(output::format_tasks(&tracker.search_issues(&board_id)?))
        }
        Action::ListBoards => Ok(output::format_boards(&tracker.boards()?)),
        Action::ShowBoard { board_id } => {
            Ok(output::format_board_view(&tracker.search_issues(&board_id)?))
        }
        Action::Transition { task_key, target } => transition(tracker, &task_key, target),
    }
}

fn comment<T: IssueTracker>(tracker: &T, task_key: &str, body: &str) -> Result<String> {
    // Fetch first so a bad key fails before anything is posted
    let issue = tracker.issue(task_key)?;
    tracker.add_comment(&issue.key, body)?;
    Ok(format!("Comment added to task: {}", issue.key))
}

fn create_task<T, P>(
    tracker: &T,
    summary: String,
    description: String,
    issue_type: String,
    useboard: Option<String>,
    prompt: P,
) -> Result<String>
where
    T: IssueTracker,
    P: FnOnce(&[Board]) -> Result<String>,
{
    let board_id = match useboard {
        Some(board_id) => board_id,
        None => {
            let boards = tracker.boards()?;
            prompt(&boards)?
        }
    };

    let key = tracker.create_issue(&NewTask {
        board_id,
        summary,
        description,
        issue_type,
    })?;
    Ok(format!("New task created: {key}"))
}

fn transition<T: IssueTracker>(
    tracker: &T,
    task_key: &str,
    target: TransitionTarget,
) -> Result<String> {
    if tracker.transition_to(task_key, target.name())? {
        Ok(format!(
            "Task moved to '{}' status: {}",
            target.name(),
            task_key
        ))
    } else {
        Ok(format!(
            "Transition to '{}' status failed for task: {}",
            target.name(),
            task_key
        ))
    }
}
