use nom::branch::alt;
use nom::combinator::map;
use nom::IResult;
use nom::sequence::{preceded, terminated};
use crate::common::ResultError;
use crate::parser::{argument, argument_keyword, bare, end, export, with_argument, keyword, parse_line, remainder};

/// Commands of the tasks session
#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// ADD due_date priority title
    Add { due_date: String, priority: String, title: String },
    List,
    /// DONE index
    Done(String),
    /// DELETE index
    Delete(String),
    /// SEARCH keyword
    Search(String),
    /// ON date
    On(String),
    Overdue,
    /// PRIORITY low|medium|high
    Priority(String),
    SortByDate,
    SortByPriority,
    /// EXPORT TO file_path
    Export(String),
    Help,
    Exit,
}

pub(crate) fn parse(line: &str) -> ResultError<Statement> {
    parse_line(statement, line)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    alt((
        add,
        map(bare("LIST"), |_| Statement::List),
        map(with_argument("DONE"), Statement::Done),
        map(with_argument("DELETE"), Statement::Delete),
        map(preceded(keyword("SEARCH"), remainder), Statement::Search),
        map(with_argument("ON"), Statement::On),
        map(bare("OVERDUE"), |_| Statement::Overdue),
        map(with_argument("PRIORITY"), Statement::Priority),
        sort,
        map(export, Statement::Export),
        map(bare("HELP"), |_| Statement::Help),
        map(alt((bare("EXIT"), bare("QUIT"))), |_| Statement::Exit),
    ))(input)
}

/// `ADD 2025-08-10 high Pay rent`
fn add(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("ADD")(input)?;
    let (input, due_date) = argument(input)?;
    let (input, priority) = argument(input)?;
    let (input, title) = remainder(input)?;
    Ok((input, Statement::Add {
        due_date: due_date.to_string(),
        priority: priority.to_string(),
        title,
    }))
}

/// `SORT DATE` or `SORT PRIORITY`
fn sort(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("SORT")(input)?;
    alt((
        map(terminated(argument_keyword("DATE"), end), |_| Statement::SortByDate),
        map(terminated(argument_keyword("PRIORITY"), end), |_| Statement::SortByPriority),
    ))(input)
}
