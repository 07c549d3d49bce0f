use nix::sys::signal::{signal, SigHandler, Signal};

/// Signals whose disposition differs between the shell and its children.
const JOB_CONTROL_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGTSTP];

/// A disposition applied to every job-control signal at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Ctrl+C and Ctrl+Z aimed at a running job must not take the shell down.
    Shell,
    /// Freshly forked children behave like ordinary foreground programs.
    Child,
}

impl Profile {
    fn handler(self) -> SigHandler {
        match self {
            Profile::Shell => SigHandler::SigIgn,
            Profile::Child => SigHandler::SigDfl,
        }
    }

    /// Install this profile for the calling process.
    ///
    /// Only swaps between `SIG_IGN` and `SIG_DFL`, so it is safe to call
    /// between `fork` and `exec`.
    pub fn apply(self) -> nix::Result<()> {
        let handler = self.handler();
        for sig in JOB_CONTROL_SIGNALS {
            // SAFETY: no Rust handler is installed, only ignore/default.
            unsafe { signal(sig, handler) }?;
        }
        Ok(())
    }
}

/// Initialize shell signal handlers
pub fn init() {
    Profile::Shell.apply().expect("Failed to ignore job-control signals");
}
