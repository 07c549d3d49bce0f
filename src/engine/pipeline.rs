use std::io;
use std::os::fd::AsFd;

use crate::parser::Pipeline;

use super::job_control::wait_exit;
use super::launcher::Program;
use super::redirect::{Input, Output};
use super::spawn::{spawn, SpawnConfig, SpawnError};
use super::state::ShellState;

// ── Pipeline execution ────────────────────────────────────────────────────

/// Run `left | right` and block until both sides are gone.
///
/// Both children are tracked under the full `command` text while they run.
/// The pipeline always runs in the foreground.
pub fn execute(pipeline: &Pipeline, command: &str, state: &mut ShellState) -> Result<(), SpawnError> {
    let left_program = Program::prepare(&pipeline.left);
    let right_program = Program::prepare(&pipeline.right);

    // Both ends are close-on-exec; each child keeps only the end it
    // duplicates onto its standard stream.
    let (reader, writer) = io::pipe().map_err(SpawnError::Pipe)?;

    let left = spawn(
        &left_program,
        &SpawnConfig {
            stdout: Output::Pipe(writer.as_fd()),
            ..SpawnConfig::default()
        },
    )?;
    let right = spawn(
        &right_program,
        &SpawnConfig {
            stdin: Input::Pipe(reader.as_fd()),
            ..SpawnConfig::default()
        },
    );

    // The reader only sees EOF once every copy of the write end is closed.
    drop(reader);
    drop(writer);

    state.track(left, command);
    let right = right.inspect(|&pid| state.track(pid, command));

    wait_exit(left);
    let _ = state.jobs.remove(left);
    if let Ok(&pid) = right.as_ref() {
        wait_exit(pid);
        let _ = state.jobs.remove(pid);
    }
    tracing::debug!(%left, "pipeline finished");

    right.map(drop)
}
