use std::io::{self, Write};

use nix::errno::Errno;
use nix::unistd::{fork, ForkResult, Pid};
use thiserror::Error;

use crate::signals::Profile;

use super::launcher::{child_exit, Program};
use super::redirect::{Input, Output};

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("dragonshell: fork failed")]
    Fork(#[source] Errno),
    #[error("dragonshell: pipe failed")]
    Pipe(#[source] io::Error),
}

/// Everything a child must set up between `fork` and `exec`.
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig<'a> {
    pub signals: Profile,
    pub stdin: Input<'a>,
    pub stdout: Output<'a>,
}

impl Default for SpawnConfig<'_> {
    fn default() -> Self {
        SpawnConfig {
            signals: Profile::Child,
            stdin: Input::Inherit,
            stdout: Output::Inherit,
        }
    }
}

/// Fork once and run `program` in the child under `config`.
///
/// Returns the child pid in the parent. Failures inside the child never
/// come back here; the child reports them itself and exits with status 1.
pub fn spawn(program: &Program, config: &SpawnConfig<'_>) -> Result<Pid, SpawnError> {
    // Nothing buffered may be duplicated into the child.
    let _ = io::stdout().flush();

    // SAFETY: the child branch only changes signal dispositions, opens and
    // duplicates descriptors, then execs or `_exit`s.
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            tracing::debug!(pid = %child, "forked child");
            Ok(child)
        }
        Ok(ForkResult::Child) => run_child(program, config),
        Err(errno) => {
            tracing::warn!("fork failed: {}", errno);
            Err(SpawnError::Fork(errno))
        }
    }
}

fn run_child(program: &Program, config: &SpawnConfig<'_>) -> ! {
    if config.signals.apply().is_err() {
        child_exit(1);
    }
    if config.stdin.install().is_err() || config.stdout.install().is_err() {
        child_exit(1);
    }
    // Pipe ends are close-on-exec, so anything not on fd 0/1 goes away here.
    program.exec()
}
