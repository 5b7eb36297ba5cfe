// ABOUTME: CLI argument definitions for the Jira task manager
// ABOUTME: Maps the flag-style interface onto a single action per invocation

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jira-tasks")]
#[command(about = "Jira task manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write a comment on a task
    #[arg(short = 'm', long, num_args = 2, value_names = ["TASK_KEY", "COMMENT"])]
    pub comment: Option<Vec<String>>,

    /// Create a new task on a board
    #[arg(short = 'n', long, num_args = 3, value_names = ["SUMMARY", "DESCRIPTION", "ISSUE_TYPE"])]
    pub newtask: Option<Vec<String>>,

    /// List tasks on a board
    #[arg(short = 'l', long, value_name = "BOARD_ID")]
    pub listtasks: Option<String>,

    /// List all boards
    #[arg(short = 'b', long)]
    pub listboards: bool,

    /// Display a simplified board
    #[arg(short = 's', long, value_name = "BOARD_ID")]
    pub showboard: Option<String>,

    /// Use a specific board when creating a new task
    #[arg(short = 'u', long, value_name = "BOARD_ID")]
    pub useboard: Option<String>,

    /// Move a task to 'In Progress' status
    #[arg(long, alias = "ip", value_name = "TASK_KEY")]
    pub inprogress: Option<String>,

    /// Move a task to 'Blocked' status
    #[arg(long, alias = "bk", value_name = "TASK_KEY")]
    pub blocked: Option<String>,

    /// Move a task to 'Closed' status
    #[arg(long, alias = "cl", value_name = "TASK_KEY")]
    pub closed: Option<String>,
}

/// Target statuses reachable through the transition flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTarget {
    InProgress,
    Blocked,
    Closed,
}

impl TransitionTarget {
    /// Status name matched against the transition names Jira offers.
    pub fn name(self) -> &'static str {
        match self {
            TransitionTarget::InProgress => "In Progress",
            TransitionTarget::Blocked => "Blocked",
            TransitionTarget::Closed => "Closed",
        }
    }
}

/// One requested operation, extracted from the flag set.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Comment {
        task_key: String,
        body: String,
    },
    NewTask {
        summary: String,
        description: String,
        issue_type: String,
    },
    ListTasks {
        board_id: String,
    },
    ListBoards,
    ShowBoard {
        board_id: String,
    },
    Transition {
        task_key: String,
        target: TransitionTarget,
    },
}

impl Cli {
    /// Resolve the flags into one action; the first present flag wins, in
    /// the same order the flags are checked here. `--useboard` is a
    /// modifier, not an action.
    pub fn action(&self) -> Option<Action> {
        if let Some([task_key, body, ..]) = self.comment.as_deref() {
            return Some(Action::Comment {
                task_key: task_key.clone(),
                body: body.clone(),
            });
        }
        if let Some([summary, description, issue_type, ..]) = self.newtask.as_deref() {
            return Some(Action::NewTask {
                summary: summary.clone(),
                description: description.clone(),
                issue_type: issue_type.clone(),
            });
        }
        if let Some(board_id) = &self.listtasks {
            return Some(Action::ListTasks {
                board_id: board_id.clone(),
            });
        }
        if self.listboards {
            return Some(Action::ListBoards);
        }
        if let Some(board_id) = &self.showboard {
            return Some(Action::ShowBoard {
                board_id: board_id.clone(),
            });
        }
        if let Some(task_key) = &self.inprogress {
            return Some(Action::Transition {
                task_key: task_key.clone(),
                target: TransitionTarget::InProgress,
            });
        }
        if let Some(task_key) = &self.blocked {
            return Some(Action::Transition {
                task_key: task_key.clone(),
                target: TransitionTarget::Blocked,
            });
        }
        if let Some(task_key) = &self.closed {
            return Some(Action::Transition {
                task_key: task_key.clone(),
                target: TransitionTarget::Closed,
            });
        }
        None
    }
}
