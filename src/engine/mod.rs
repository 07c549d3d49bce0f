mod state;
mod redirect;
mod path;
mod launcher;
mod spawn;
mod pipeline;
mod execution;
pub mod job_control;

// Re-export the public API so that external code (`main.rs`, `builtins/`)
// can keep using `engine::ShellState`, `engine::ExecutionResult`, etc.
pub use state::{ExecutionResult, ShellState};
pub use execution::execute_line;
