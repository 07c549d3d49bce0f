use std::io;
use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "jobs",
    description: "Display status of jobs.",
    run: jobs_runner,
};

pub fn jobs_runner(_args: &[String], state: &mut ShellState) -> ExecutionResult {
    if let Err(e) = state.jobs.print(&mut io::stdout().lock()) {
        tracing::warn!("jobs: {}", e);
    }
    ExecutionResult::KeepRunning
}
