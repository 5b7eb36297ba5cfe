// ABOUTME: Library surface of the Jira task manager CLI
// ABOUTME: Exposes flag parsing, config, dispatch, and output to tests

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
