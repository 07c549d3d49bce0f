use crate::engine::{ExecutionResult, ShellState};
use crate::builtins;


pub type BuiltinRunner = fn(&[String], &mut ShellState) -> ExecutionResult;

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub run: BuiltinRunner,
}

pub const BUILTINS: &[CommandInfo] = &[
    builtins::cd::COMMAND_INFO_CD,
    builtins::cd::COMMAND_INFO_PWD,
    builtins::jobs::COMMAND_INFO,
    builtins::system::COMMAND_INFO_EXIT,
];

pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_builtins() {
        for name in ["cd", "pwd", "jobs", "exit"] {
            assert_eq!(find_command(name).map(|c| c.name), Some(name));
        }
    }

    #[test]
    fn test_unknown_is_not_builtin() {
        assert!(find_command("ls").is_none());
        assert!(find_command("./exit").is_none());
    }
}
