use nom::character::complete::multispace1;
use nom::error::{Error, ErrorKind};
use nom::IResult;
use crate::parser::{keyword, remainder};

/// Parse `EXPORT TO file_path` pattern.
pub(crate) fn export(input: &str) -> IResult<&str, String> {
    let (input, _) = keyword("EXPORT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = keyword("TO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, file_path) = remainder(input)?;
    let quotation_marks :&[_] = &['\'', '"'];
    let file_path = file_path.trim_matches(quotation_marks).to_string();
    if file_path.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, file_path))
}
