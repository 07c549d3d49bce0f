use std::path::PathBuf;

/// Remove every literal `"` from each argument. Quotes are cosmetic only.
pub fn strip_quotes(argv: &[String]) -> Vec<String> {
    argv.iter().map(|arg| arg.replace('"', "")).collect()
}

/// Map a program token to the path handed to `execv`.
///
/// Tokens containing `/` are used as given; bare names are looked up in
/// the current directory only. There is no `PATH` search.
pub fn resolve_program(program: &str) -> PathBuf {
    if program.contains('/') {
        PathBuf::from(program)
    } else {
        PathBuf::from(format!("./{}", program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_strip_quotes() {
        let argv = vec!["\"echo\"".to_string(), "a\"b\"c".to_string(), "plain".to_string()];
        assert_eq!(strip_quotes(&argv), vec!["echo", "abc", "plain"]);
    }

    #[test]
    fn test_bare_name_resolves_to_cwd() {
        assert_eq!(resolve_program("hello"), Path::new("./hello"));
    }

    #[test]
    fn test_path_is_taken_literally() {
        assert_eq!(resolve_program("/bin/ls"), Path::new("/bin/ls"));
        assert_eq!(resolve_program("bin/tool"), Path::new("bin/tool"));
        assert_eq!(resolve_program("./run"), Path::new("./run"));
    }
}
