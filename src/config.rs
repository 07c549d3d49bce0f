/// Fixed shell limits and operator-facing strings.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub banner: &'static str,
    pub prompt: &'static str,
    /// Maximum characters kept from an input line (and from stored command text).
    pub line_limit: usize,
    /// Additional tokens allowed after the command token.
    pub max_args: usize,
    /// Upper bound on jobs signalled during `exit`.
    pub shutdown_snapshot: usize,
}

impl ShellConfig {
    /// Command token plus its arguments.
    pub fn max_tokens(&self) -> usize {
        1 + self.max_args
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            banner: "Welcome to Dragon Shell!\n",
            prompt: "dragonshell > ",
            line_limit: 100,
            max_args: 5,
            shutdown_snapshot: 256,
        }
    }
}
