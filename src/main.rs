mod builtins;
mod config;
mod engine;
mod parser;
mod signals;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::ShellConfig;
use engine::{job_control, ShellState};

fn init_tracing() {
    // Diagnostics go to stderr so the operator transcript on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> rustyline::Result<()> {
    init_tracing();
    signals::init();

    let mut state = ShellState::new(ShellConfig::default());
    println!("{}", state.config.banner);

    let mut rl = DefaultEditor::new()?;

    loop {
        job_control::reap(&mut state.jobs);

        let readline = rl.readline(state.config.prompt);
        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match engine::execute_line(&line, &mut state) {
                    engine::ExecutionResult::Exit => break,
                    engine::ExecutionResult::KeepRunning => {}
                }
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if !state.jobs.is_empty() {
        tracing::debug!(untracked = state.jobs.len(), "shell exiting with jobs still tracked");
    }
    Ok(())
}
