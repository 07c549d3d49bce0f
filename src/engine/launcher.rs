use std::ffi::CString;
use std::os::fd::BorrowedFd;
use std::os::unix::ffi::OsStringExt;

use nix::unistd::execv;

use super::path::{resolve_program, strip_quotes};

pub const COMMAND_NOT_FOUND: &str = "dragonshell: Command not found";

/// A program ready to be exec'd from a forked child.
///
/// Everything that allocates happens in [`Program::prepare`], before `fork`,
/// so the child only has to call [`Program::exec`].
#[derive(Debug)]
pub struct Program {
    /// `None` when the token cannot be turned into an exec path at all.
    path: Option<CString>,
    argv: Vec<CString>,
}

impl Program {
    pub fn prepare(argv: &[String]) -> Program {
        let argv = strip_quotes(argv);
        let cargs: Option<Vec<CString>> = argv
            .iter()
            .map(|arg| CString::new(arg.as_bytes()).ok())
            .collect();
        let path = argv.first().and_then(|program| {
            let bytes = resolve_program(program).into_os_string().into_vec();
            if bytes.len() >= nix::libc::PATH_MAX as usize {
                return None;
            }
            CString::new(bytes).ok()
        });
        match cargs {
            Some(argv) if !argv.is_empty() => Program { path, argv },
            _ => Program { path: None, argv: Vec::new() },
        }
    }

    /// Replace the current process image, or report and `_exit(1)`.
    pub fn exec(&self) -> ! {
        if let Some(path) = &self.path {
            let _ = execv(path, &self.argv);
        }
        not_found_exit()
    }

    #[cfg(test)]
    fn path(&self) -> Option<&str> {
        self.path.as_ref().and_then(|p| p.to_str().ok())
    }
}

/// Tell the operator the program could not be run and leave the child.
pub fn not_found_exit() -> ! {
    // SAFETY: fd 1 stays open for the life of the child.
    let stdout = unsafe { BorrowedFd::borrow_raw(nix::libc::STDOUT_FILENO) };
    let _ = nix::unistd::write(stdout, COMMAND_NOT_FOUND.as_bytes());
    let _ = nix::unistd::write(stdout, b"\n");
    child_exit(1)
}

/// Leave a forked child without running the parent's exit handlers.
pub fn child_exit(code: i32) -> ! {
    // SAFETY: `_exit` only terminates the calling process.
    unsafe { nix::libc::_exit(code) }
}
