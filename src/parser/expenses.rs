use nom::branch::alt;
use nom::combinator::{map, opt};
use nom::IResult;
use nom::sequence::{preceded, terminated};
use crate::common::ResultError;
use crate::parser::{argument, argument_keyword, bare, end, export, with_argument, keyword, parse_line, remainder};

/// Commands of the expenses session
#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// ADD date amount [category] [note]
    Add { date: String, amount: String, category: Option<String>, note: String },
    List,
    /// DELETE index
    Delete(String),
    /// TOTAL [category]
    Total(Option<String>),
    /// SUMMARY month year
    Summary(String, String),
    SortByDate,
    Categories,
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
        map(with_argument("DELETE"), Statement::Delete),
        total,
        summary,
        map(preceded(keyword("SORT"), preceded(argument_keyword("DATE"), end)), |_| Statement::SortByDate),
        map(bare("CATEGORIES"), |_| Statement::Categories),
        map(export, Statement::Export),
        map(bare("HELP"), |_| Statement::Help),
        map(alt((bare("EXIT"), bare("QUIT"))), |_| Statement::Exit),
    ))(input)
}

/// `ADD 2025-08-02 20.00 food Lunch with Sam`
fn add(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("ADD")(input)?;
    let (input, date) = argument(input)?;
    let (input, amount) = argument(input)?;
    let (input, category) = opt(argument)(input)?;
    let (input, note) = remainder(input)?;
    Ok((input, Statement::Add {
        date: date.to_string(),
        amount: amount.to_string(),
        category: category.map(str::to_string),
        note,
    }))
}

/// `TOTAL` or `TOTAL food`
fn total(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("TOTAL")(input)?;
    let (input, category) = terminated(opt(argument), end)(input)?;
    Ok((input, Statement::Total(category.map(str::to_string))))
}

/// `SUMMARY 8 2025`
fn summary(input: &str) -> IResult<&str, Statement> {
    let (input, _) = keyword("SUMMARY")(input)?;
    let (input, month) = argument(input)?;
    let (input, year) = terminated(argument, end)(input)?;
    Ok((input, Statement::Summary(month.to_string(), year.to_string())))
}
