//! Command grammar of the interactive sessions. Parsers only split a line into raw arguments,
//! turning them into typed values is left to [`crate::validate`].

pub(crate) mod expenses;
pub(crate) mod tasks;
mod export;
mod single;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{multispace0, multispace1};
use nom::combinator::{eof, peek, rest};
use nom::IResult;
use nom::sequence::{preceded, terminated};
use crate::common::{Error, ResultError};

pub(crate) use single::with_argument;
pub(crate) use export::export;

/// Run a statement parser over one line of input. Surrounding spaces and a trailing `;` are ignored.
pub(crate) fn parse_line<'a, O>(mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>, line: &'a str) -> ResultError<O> {
    let line = line.trim().trim_end_matches(';').trim_end();
    match parser(line) {
        Ok((_, statement)) => Ok(statement),
        Err(_) => Err(Error::format(format!("unable to parse '{line}', type HELP for the list of commands"))),
    }
}

/// Case-insensitive keyword that must be followed by a space or the end of input
pub(crate) fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), peek(alt((multispace1, eof))))
}

/// One space-separated argument
pub(crate) fn argument(input: &str) -> IResult<&str, &str> {
    preceded(multispace1, is_not(" \t\r\n"))(input)
}

/// Everything up to the end of the line, e.g. a note or a title. May be empty.
pub(crate) fn remainder(input: &str) -> IResult<&str, String> {
    let (input, _) = multispace0(input)?;
    let (input, text) = rest(input)?;
    Ok((input, text.trim().to_string()))
}

pub(crate) fn end(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, eof)(input)
}

/// Second word of a two-word command such as `SORT DATE`
pub(crate) fn argument_keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(multispace1, keyword(word))
}

/// A keyword taking no argument, e.g. `LIST`
pub(crate) fn bare<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), end)
}
