use nom::{
    bytes::complete::is_not,
    character::complete::multispace0,
    sequence::preceded,
    IResult,
    Parser,
};

// ── Low-level nom parsers ──────────────────────────────────────────────────

/// One whitespace-delimited word. Quotes are ordinary characters here.
pub fn parse_word(input: &str) -> IResult<&str, &str> {
    is_not(" \t\r\n")(input)
}

pub fn parse_next_word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, parse_word).parse(input)
}
