use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use nix::unistd::Pid;
use thiserror::Error;

use crate::config::ShellConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Running,
    Suspended,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Running => write!(f, "R"),
            JobState::Suspended => write!(f, "T"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub pid: Pid,
    pub state: JobState,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no job with pid {0}")]
    NotFound(Pid),
    #[error("out of memory while tracking job")]
    Alloc,
}

/// Every process the shell has spawned and not yet seen exit, keyed by pid.
///
/// The registry knows nothing about the OS beyond the pid value; the control
/// loop is its only writer.
#[derive(Debug)]
pub struct JobRegistry {
    jobs: HashMap<Pid, Job>,
    command_limit: usize,
}

impl JobRegistry {
    pub fn new(command_limit: usize) -> Self {
        JobRegistry {
            jobs: HashMap::new(),
            command_limit,
        }
    }

    /// Track `pid`, or overwrite the state and command of an existing entry.
    pub fn add(&mut self, pid: Pid, command: &str, state: JobState) -> Result<(), RegistryError> {
        let command = truncate(command, self.command_limit);
        if let Some(job) = self.jobs.get_mut(&pid) {
            job.state = state;
            job.command = command;
            return Ok(());
        }
        self.jobs.try_reserve(1).map_err(|_| RegistryError::Alloc)?;
        self.jobs.insert(pid, Job { pid, state, command });
        Ok(())
    }

    pub fn update(&mut self, pid: Pid, new_state: JobState) -> Result<(), RegistryError> {
        match self.jobs.get_mut(&pid) {
            Some(job) => {
                job.state = new_state;
                Ok(())
            }
            None => Err(RegistryError::NotFound(pid)),
        }
    }

    pub fn remove(&mut self, pid: Pid) -> Result<Job, RegistryError> {
        self.jobs.remove(&pid).ok_or(RegistryError::NotFound(pid))
    }

    /// Snapshot of at most `max` `(pid, state)` pairs, detached from the
    /// registry so callers can signal and remove while walking it.
    pub fn collect(&self, max: usize) -> Vec<(Pid, JobState)> {
        let mut snapshot = Vec::with_capacity(max.min(self.jobs.len()));
        snapshot.extend(self.jobs.values().take(max).map(|job| (job.pid, job.state)));
        snapshot
    }

    /// Write one `pid state command` line per job, ordered by pid.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut jobs: Vec<_> = self.jobs.values().collect();
        jobs.sort_by_key(|job| job.pid);
        for job in jobs {
            writeln!(out, "{} {} {}", job.pid, job.state, job.command)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.jobs.clear();
    }

    #[cfg(test)]
    pub fn get(&self, pid: Pid) -> Option<&Job> {
        self.jobs.get(&pid)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn truncate(command: &str, limit: usize) -> String {
    command.chars().take(limit).collect()
}

pub struct ShellState {
    pub config: ShellConfig,
    pub jobs: JobRegistry,
}

impl ShellState {
    pub fn new(config: ShellConfig) -> Self {
        let jobs = JobRegistry::new(config.line_limit);
        ShellState { config, jobs }
    }

    /// Register a freshly forked child. Allocation failure only costs
    /// observability: the process keeps running untracked.
    pub fn track(&mut self, pid: Pid, command: &str) {
        if let Err(e) = self.jobs.add(pid, command, JobState::Running) {
            tracing::warn!(%pid, "job not tracked: {}", e);
        }
    }
}

pub enum ExecutionResult {
    KeepRunning,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: i32) -> Pid {
        Pid::from_raw(raw)
    }

    #[test]
    fn test_readd_updates_in_place() {
        let mut reg = JobRegistry::new(100);
        reg.add(pid(42), "x", JobState::Running).unwrap();
        reg.add(pid(42), "y", JobState::Suspended).unwrap();

        assert_eq!(reg.len(), 1);
        let job = reg.get(pid(42)).unwrap();
        assert_eq!(job.state, JobState::Suspended);
        assert_eq!(job.command, "y");
    }

    #[test]
    fn test_update_and_remove_report_missing() {
        let mut reg = JobRegistry::new(100);
        assert_eq!(reg.update(pid(7), JobState::Suspended), Err(RegistryError::NotFound(pid(7))));
        assert_eq!(reg.remove(pid(7)), Err(RegistryError::NotFound(pid(7))));

        reg.add(pid(7), "sleep 10", JobState::Running).unwrap();
        reg.update(pid(7), JobState::Suspended).unwrap();
        assert_eq!(reg.get(pid(7)).unwrap().state, JobState::Suspended);
        assert!(reg.remove(pid(7)).is_ok());
        assert!(reg.is_empty());
    }

    #[test]
    fn test_collect_skips_removed_and_respects_cap() {
        let mut reg = JobRegistry::new(100);
        for raw in 1..=10 {
            reg.add(pid(raw), "job", JobState::Running).unwrap();
        }
        reg.remove(pid(3)).unwrap();

        let all = reg.collect(256);
        assert_eq!(all.len(), 9);
        assert!(all.iter().all(|(p, _)| *p != pid(3)));

        assert_eq!(reg.collect(4).len(), 4);
        assert!(reg.collect(0).is_empty());
    }

    #[test]
    fn test_command_is_truncated() {
        let mut reg = JobRegistry::new(5);
        reg.add(pid(1), "abcdefgh", JobState::Running).unwrap();
        assert_eq!(reg.get(pid(1)).unwrap().command, "abcde");
    }

    #[test]
    fn test_print_format() {
        let mut reg = JobRegistry::new(100);
        reg.add(pid(20), "./b", JobState::Suspended).unwrap();
        reg.add(pid(10), "./a arg", JobState::Running).unwrap();

        let mut out = Vec::new();
        reg.print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10 R ./a arg\n20 T ./b\n");
    }

    #[test]
    fn test_clear() {
        let mut reg = JobRegistry::new(100);
        reg.add(pid(1), "a", JobState::Running).unwrap();
        reg.add(pid(2), "b", JobState::Suspended).unwrap();
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.collect(256).is_empty());
    }
}
