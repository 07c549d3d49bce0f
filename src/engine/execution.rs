use std::path::Path;

use crate::builtins;
use crate::parser::{self, SimpleCommand};

use super::job_control::wait_foreground;
use super::launcher::{Program, COMMAND_NOT_FOUND};
use super::pipeline;
use super::redirect::{Input, Output};
use super::spawn::{spawn, SpawnConfig};
use super::state::{ExecutionResult, ShellState};

// ── Single command (no pipe) ──────────────────────────────────────────────

/// Fork one child for `cmd`, then either wait for it or leave it running.
fn execute_simple(cmd: &SimpleCommand, command: &str, background: bool, state: &mut ShellState) {
    let program = Program::prepare(&cmd.argv);

    let stdin = match cmd.redirects.input.as_deref() {
        Some(file) => Input::File(Path::new(file)),
        None => Input::Inherit,
    };
    let stdout = match cmd.redirects.output.as_deref() {
        Some(file) => Output::File(Path::new(file)),
        None if background => Output::Discard,
        None => Output::Inherit,
    };

    let pid = match spawn(&program, &SpawnConfig { stdin, stdout, ..SpawnConfig::default() }) {
        Ok(pid) => pid,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    state.track(pid, command);

    if background {
        println!("PID {} is sent to background", pid);
    } else {
        let transition = wait_foreground(&mut state.jobs, pid);
        tracing::debug!(%pid, ?transition, "foreground wait returned");
    }
}

// ── One input line ────────────────────────────────────────────────────────

/// Run one line of operator input: built-in, pipeline, or a single program.
pub fn execute_line(line: &str, state: &mut ShellState) -> ExecutionResult {
    let command = parser::bound_line(line, state.config.line_limit);
    let max_tokens = state.config.max_tokens();

    let mut tokens = parser::tokenize(&command, max_tokens);
    if tokens.is_empty() {
        return ExecutionResult::KeepRunning;
    }
    let background = parser::take_background(&mut tokens);
    if tokens.is_empty() {
        return ExecutionResult::KeepRunning;
    }

    if let Some(cmd_info) = builtins::registry::find_command(&tokens[0]) {
        tracing::trace!(builtin = cmd_info.name, "{}", cmd_info.description);
        return (cmd_info.run)(&tokens[1..], state);
    }

    if let Some(parsed) = parser::split_pipe(&tokens) {
        match parsed {
            Ok(pipeline) => {
                if background {
                    tracing::debug!("background marker ignored for pipeline");
                }
                if let Err(e) = pipeline::execute(&pipeline, &command, state) {
                    println!("{}", e);
                }
            }
            Err(e) => {
                tracing::debug!("pipeline rejected: {}", e);
                println!("{}", COMMAND_NOT_FOUND);
            }
        }
        return ExecutionResult::KeepRunning;
    }

    let cmd = parser::split_redirects(&tokens, max_tokens);
    if !cmd.argv.is_empty() {
        execute_simple(&cmd, &command, background, state);
    }
    ExecutionResult::KeepRunning
}
