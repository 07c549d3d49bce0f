use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::engine::state::{JobRegistry, JobState};

/// What a single wait event did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The process stopped; its job is now Suspended and stays tracked.
    Suspended,
    /// The process exited or was killed; its job is gone.
    Removed,
    /// Nothing the foreground wait cares about (e.g. continued).
    Unchanged,
}

/// Apply one wait status to the registry. Each event yields exactly one
/// transition.
pub fn apply_wait_status(jobs: &mut JobRegistry, status: WaitStatus) -> Transition {
    match status {
        WaitStatus::Stopped(pid, sig) => {
            tracing::debug!(%pid, ?sig, "job stopped");
            if let Err(e) = jobs.update(pid, JobState::Suspended) {
                tracing::debug!("stopped process untracked: {}", e);
            }
            Transition::Suspended
        }
        WaitStatus::Exited(pid, _) | WaitStatus::Signaled(pid, _, _) => {
            tracing::debug!(%pid, ?status, "job finished");
            let _ = jobs.remove(pid);
            Transition::Removed
        }
        _ => Transition::Unchanged,
    }
}

/// Block until the foreground child `pid` exits or stops.
///
/// `ECHILD` means `pid` can never be waited on again, so its job is
/// dropped. Any other error except `EINTR` ends the wait with the job
/// still tracked.
pub fn wait_foreground(jobs: &mut JobRegistry, pid: Pid) -> Transition {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(status) => match apply_wait_status(jobs, status) {
                Transition::Unchanged => continue,
                done => return done,
            },
            Err(Errno::EINTR) => continue,
            Err(Errno::ECHILD) => {
                tracing::warn!(%pid, "foreground child already gone");
                let _ = jobs.remove(pid);
                return Transition::Removed;
            }
            Err(e) => {
                tracing::warn!(%pid, "foreground wait failed: {}", e);
                return Transition::Unchanged;
            }
        }
    }
}

/// Block until `pid` has exited, ignoring stops.
pub fn wait_exit(pid: Pid) {
    loop {
        match waitpid(pid, None) {
            Ok(WaitStatus::Exited(..)) | Ok(WaitStatus::Signaled(..)) => return,
            Ok(_) | Err(Errno::EINTR) => continue,
            Err(e) => {
                tracing::debug!(%pid, "wait failed: {}", e);
                return;
            }
        }
    }
}

/// Collect every already-finished child without blocking.
pub fn reap(jobs: &mut JobRegistry) -> usize {
    let mut reaped = 0;
    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(status) => {
                if apply_wait_status(jobs, status) == Transition::Removed {
                    reaped += 1;
                }
            }
            Err(Errno::EINTR) => continue,
            // ECHILD: nothing left to reap.
            Err(_) => break,
        }
    }
    if reaped > 0 {
        tracing::debug!(reaped, "reaped background jobs");
    }
    reaped
}

/// Terminate every tracked job and empty the registry.
///
/// All jobs get SIGTERM first, then SIGCONT so stopped ones wake up to act
/// on it, and only then are they waited on.
pub fn shutdown_with<S, W>(jobs: &mut JobRegistry, cap: usize, mut send: S, mut wait: W)
where
    S: FnMut(Pid, Signal),
    W: FnMut(Pid),
{
    let snapshot = jobs.collect(cap);
    tracing::debug!(jobs = snapshot.len(), "shutting down");

    for &(pid, _) in &snapshot {
        send(pid, Signal::SIGTERM);
    }
    for &(pid, _) in &snapshot {
        send(pid, Signal::SIGCONT);
    }
    for &(pid, _) in &snapshot {
        wait(pid);
        let _ = jobs.remove(pid);
    }
    jobs.clear();
}

pub fn shutdown(jobs: &mut JobRegistry, cap: usize) {
    reap(jobs);
    shutdown_with(
        jobs,
        cap,
        |pid, sig| {
            if let Err(e) = kill(pid, sig) {
                tracing::debug!(%pid, ?sig, "kill failed: {}", e);
            }
        },
        wait_exit,
    );
}
