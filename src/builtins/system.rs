use crate::engine::job_control;
use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;

pub const COMMAND_INFO_EXIT: CommandInfo = CommandInfo {
    name: "exit",
    description: "Exit the shell.",
    run: exit_runner,
};

pub fn exit_runner(_args: &[String], state: &mut ShellState) -> ExecutionResult {
    job_control::shutdown(&mut state.jobs, state.config.shutdown_snapshot);
    ExecutionResult::Exit
}
