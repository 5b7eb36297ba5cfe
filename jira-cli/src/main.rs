// ABOUTME: Main entry point for the Jira task manager CLI
// ABOUTME: Loads credentials, builds the client, dispatches, reports errors

use anyhow::Result;
use clap::Parser;
use dialoguer::Input;
use jira_sdk::{Board, JiraClient};
use secrecy::SecretString;

use jira_cli::cli::{Action, Cli};
use jira_cli::commands;
use jira_cli::config::Credentials;
use jira_cli::output;

fn main() {
    env_logger::init();

    // Values already exported in the environment win over .env entries
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            log::warn!("failed to load .env: {err}");
        }
    }

    let cli = Cli::parse();
    let Some(action) = cli.action() else {
        println!("No action specified. Use -h for help.");
        return;
    };

    match run(action, cli.useboard) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
        Err(err) => {
            println!("An error occurred: {err}");
            std::process::exit(1);
        }
    }
}

fn run(action: Action, useboard: Option<String>) -> Result<String> {
    let credentials = Credentials::from_env()?;
    let client = JiraClient::builder()
        .base_url(credentials.jira_url)
        .username(credentials.username)
        .api_token(SecretString::new(credentials.api_token.into_boxed_str()))
        .build()?;

    commands::dispatch(&client, action, useboard, prompt_for_board)
}

/// Show the available boards and ask which one the new task belongs on.
fn prompt_for_board(boards: &[Board]) -> Result<String> {
    println!("Available boards:");
    if !boards.is_empty() {
        println!("{}", output::format_boards(boards));
    }

    let board_id: String = Input::new()
        .with_prompt("Enter the ID of the board to use for the new task")
        .interact_text()?;
    Ok(board_id)
}
