// ABOUTME: Plain-text output formatting for boards and tasks
// ABOUTME: Line formats follow the fixed contract the CLI has always printed

use jira_sdk::{Board, Issue};

pub fn board_line(board: &Board) -> String {
    format!("Board ID: {}, Board Name: {}", board.id, board.name)
}

pub fn format_boards(boards: &[Board]) -> String {
    boards
        .iter()
        .map(board_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_tasks(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("Task Key: {}, Summary: {}", issue.key, issue.fields.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board view with resolved assignees; tasks without one show "Unassigned".
pub fn format_board_view(issues: &[Issue]) -> String {
    let mut lines = vec!["Board Tasks:".to_string()];
    for issue in issues {
        let assignee = issue
            .fields
            .assignee
            .as_ref()
            .map(|user| user.display_name.as_str())
            .unwrap_or("Unassigned");
        lines.push(format!(
            "Task: {}, Assignee: {}, Summary: {}",
            issue.key, assignee, issue.fields.summary
        ));
    }
    lines.join("\n")
}
