mod ast;
mod combinators;

pub use ast::{Pipeline, Redirects, SimpleCommand, BACKGROUND, PIPE, REDIRECT_IN, REDIRECT_OUT};

use combinators::parse_next_word;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("pipeline is missing a command on one side of `|`")]
    EmptyPipelineSide,
}

// ── Public API ────────────────────────────────────────────────────────────

/// Clip an input line to `limit` characters and drop the line terminator.
pub fn bound_line(line: &str, limit: usize) -> String {
    let clipped: String = line.chars().take(limit).collect();
    clipped.trim_end_matches(['\n', '\r']).to_string()
}

/// Split a line on whitespace, keeping at most `max_tokens` words.
/// Surplus words are dropped silently.
pub fn tokenize(line: &str, max_tokens: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = line;
    while tokens.len() < max_tokens {
        match parse_next_word(rest) {
            Ok((after, word)) => {
                tokens.push(word.to_string());
                rest = after;
            }
            Err(_) => break,
        }
    }
    tokens
}

/// Strip a trailing `&` and report whether it was there.
pub fn take_background(tokens: &mut Vec<String>) -> bool {
    if tokens.last().is_some_and(|t| t == BACKGROUND) {
        tokens.pop();
        true
    } else {
        false
    }
}

/// Split on the first `|` token.
///
/// Returns `None` when the line has no pipe. Later `|` tokens are left in
/// the right-hand argv untouched.
pub fn split_pipe(tokens: &[String]) -> Option<Result<Pipeline, ParseError>> {
    let pos = tokens.iter().position(|t| t == PIPE)?;
    let (left, right) = (&tokens[..pos], &tokens[pos + 1..]);
    if left.is_empty() || right.is_empty() {
        return Some(Err(ParseError::EmptyPipelineSide));
    }
    Some(Ok(Pipeline {
        left: left.to_vec(),
        right: right.to_vec(),
    }))
}

/// Pull `< file` and `> file` out of a token list.
///
/// An operator with no following token is kept as an ordinary argument.
/// The last occurrence of each operator wins, and the remaining argv is
/// capped at `max_tokens`.
pub fn split_redirects(tokens: &[String], max_tokens: usize) -> SimpleCommand {
    let mut argv = Vec::new();
    let mut redirects = Redirects::default();
    let mut i = 0;
    while i < tokens.len() && argv.len() < max_tokens {
        let has_target = i + 1 < tokens.len();
        match tokens[i].as_str() {
            REDIRECT_IN if has_target => {
                redirects.input = Some(tokens[i + 1].clone());
                i += 2;
            }
            REDIRECT_OUT if has_target => {
                redirects.output = Some(tokens[i + 1].clone());
                i += 2;
            }
            _ => {
                argv.push(tokens[i].clone());
                i += 1;
            }
        }
    }
    SimpleCommand { argv, redirects }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        tokenize(s, 64)
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("ls -la", 6), vec!["ls", "-la"]);
    }

    #[test]
    fn test_tokenize_extra_spaces() {
        assert_eq!(tokenize("  ls \t  -la  \n", 6), vec!["ls", "-la"]);
    }

    #[test]
    fn test_tokenize_quotes_are_not_separators() {
        assert_eq!(tokenize("echo \"hello world\"", 6), vec!["echo", "\"hello", "world\""]);
    }

    #[test]
    fn test_tokenize_drops_surplus() {
        let tokens = tokenize("a b c d e f g h", 6);
        assert_eq!(tokens, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("", 6).is_empty());
        assert!(tokenize("   \t\n", 6).is_empty());
    }

    #[test]
    fn test_bound_line() {
        assert_eq!(bound_line("echo hi\n", 100), "echo hi");
        assert_eq!(bound_line("abcdef", 3), "abc");
    }

    #[test]
    fn test_take_background() {
        let mut tokens = words("sleep 5 &");
        assert!(take_background(&mut tokens));
        assert_eq!(tokens, vec!["sleep", "5"]);

        let mut only = words("&");
        assert!(take_background(&mut only));
        assert!(only.is_empty());

        let mut mid = words("a & b");
        assert!(!take_background(&mut mid));
        assert_eq!(mid.len(), 3);
    }

    #[test]
    fn test_split_pipe() {
        assert_eq!(split_pipe(&words("ls -l")), None);

        let pipeline = split_pipe(&words("ls -l | wc -l")).unwrap().unwrap();
        assert_eq!(pipeline.left, vec!["ls", "-l"]);
        assert_eq!(pipeline.right, vec!["wc", "-l"]);
    }

    #[test]
    fn test_split_pipe_keeps_later_pipes() {
        let pipeline = split_pipe(&words("a | b | c")).unwrap().unwrap();
        assert_eq!(pipeline.left, vec!["a"]);
        assert_eq!(pipeline.right, vec!["b", "|", "c"]);
    }

    #[test]
    fn test_split_pipe_rejects_empty_side() {
        assert_eq!(split_pipe(&words("| wc")), Some(Err(ParseError::EmptyPipelineSide)));
        assert_eq!(split_pipe(&words("ls |")), Some(Err(ParseError::EmptyPipelineSide)));
        assert_eq!(split_pipe(&words("|")), Some(Err(ParseError::EmptyPipelineSide)));
    }

    #[test]
    fn test_split_redirects() {
        let cmd = split_redirects(&words("sort < in.txt > out.txt"), 6);
        assert_eq!(cmd.argv, vec!["sort"]);
        assert_eq!(cmd.redirects.input.as_deref(), Some("in.txt"));
        assert_eq!(cmd.redirects.output.as_deref(), Some("out.txt"));
    }

    #[test]
    fn test_split_redirects_dangling_operator_is_argument() {
        let cmd = split_redirects(&words("echo >"), 6);
        assert_eq!(cmd.argv, vec!["echo", ">"]);
        assert_eq!(cmd.redirects, Redirects::default());
    }

    #[test]
    fn test_split_redirects_last_wins() {
        let cmd = split_redirects(&words("echo > a > b"), 6);
        assert_eq!(cmd.argv, vec!["echo"]);
        assert_eq!(cmd.redirects.output.as_deref(), Some("b"));
    }

    #[test]
    fn test_split_redirects_only_redirect_yields_empty_argv() {
        let cmd = split_redirects(&words("> out.txt"), 6);
        assert!(cmd.argv.is_empty());
        assert_eq!(cmd.redirects.output.as_deref(), Some("out.txt"));
    }
}
