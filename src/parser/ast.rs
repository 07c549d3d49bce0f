// ── AST types ──────────────────────────────────────────────────────────────

pub const PIPE: &str = "|";
pub const REDIRECT_IN: &str = "<";
pub const REDIRECT_OUT: &str = ">";
pub const BACKGROUND: &str = "&";

/// Files named by `<` and `>` on a plain command line.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Redirects {
    /// `<  file` — read stdin from file (must exist)
    pub input: Option<String>,
    /// `>  file` — create/truncate file and write stdout to it
    pub output: Option<String>,
}

/// A command with its redirection operators pulled out.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SimpleCommand {
    pub argv: Vec<String>,
    pub redirects: Redirects,
}

/// Exactly two commands joined by `|`; both sides are non-empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pipeline {
    pub left: Vec<String>,
    pub right: Vec<String>,
}
