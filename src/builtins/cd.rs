use std::env;
use crate::engine::{ExecutionResult, ShellState};
use crate::builtins::registry::CommandInfo;

pub const COMMAND_INFO_CD: CommandInfo = CommandInfo {
    name: "cd",
    description: "Change the shell working directory.",
    run: cd_runner,
};

pub const COMMAND_INFO_PWD: CommandInfo = CommandInfo {
    name: "pwd",
    description: "Print the name of the current working directory.",
    run: pwd_runner,
};

pub fn pwd_runner(_args: &[String], _state: &mut ShellState) -> ExecutionResult {
    pwd();
    ExecutionResult::KeepRunning
}

pub fn cd_runner(args: &[String], _state: &mut ShellState) -> ExecutionResult {
    if let Err(e) = run(args) {
        println!("dragonshell: {}", e);
    }
    ExecutionResult::KeepRunning
}

pub fn run(args: &[String]) -> Result<(), String> {
    let target = args.first().ok_or("Expected argument to \"cd\"".to_string())?;
    env::set_current_dir(target).map_err(|e| {
        tracing::debug!("cd {}: {}", target, e);
        "No such file or directory".to_string()
    })
}

pub fn pwd() {
    match env::current_dir() {
        Ok(path) => println!("{}", path.display()),
        Err(e) => tracing::warn!("pwd: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_requires_argument() {
        assert_eq!(run(&[]), Err("Expected argument to \"cd\"".to_string()));
    }

    #[test]
    fn test_cd_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").display().to_string();
        assert_eq!(run(&[missing]), Err("No such file or directory".to_string()));
    }
}
