use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::BorrowedFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use nix::unistd::{dup2_stdin, dup2_stdout};

/// Where a spawned child reads standard input from.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    Inherit,
    /// `< file`; the file must already exist.
    File(&'a Path),
    Pipe(BorrowedFd<'a>),
}

/// Where a spawned child writes standard output to.
#[derive(Debug, Clone, Copy)]
pub enum Output<'a> {
    Inherit,
    /// `> file`; created or truncated with mode 0644.
    File(&'a Path),
    Pipe(BorrowedFd<'a>),
    /// Background jobs without `>` write to `/dev/null`.
    Discard,
}

/// Open a file for an input redirect (stdin).
pub fn open_stdin_redirect(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Open a file for an output redirect (stdout).
pub fn open_stdout_redirect(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

fn open_discard() -> io::Result<File> {
    OpenOptions::new().write(true).open("/dev/null")
}

impl Input<'_> {
    /// Install this source on fd 0 of the calling (child) process.
    pub fn install(&self) -> io::Result<()> {
        match *self {
            Input::Inherit => Ok(()),
            Input::File(path) => {
                let file = open_stdin_redirect(path)?;
                dup2_stdin(&file)?;
                Ok(())
            }
            Input::Pipe(fd) => Ok(dup2_stdin(fd)?),
        }
    }
}

impl Output<'_> {
    /// Install this sink on fd 1 of the calling (child) process.
    pub fn install(&self) -> io::Result<()> {
        match *self {
            Output::Inherit => Ok(()),
            Output::File(path) => {
                let file = open_stdout_redirect(path)?;
                dup2_stdout(&file)?;
                Ok(())
            }
            Output::Pipe(fd) => Ok(dup2_stdout(fd)?),
            Output::Discard => {
                // Losing /dev/null just leaves output on the terminal.
                if let Ok(file) = open_discard() {
                    let _ = dup2_stdout(&file);
                }
                Ok(())
            }
        }
    }
}
