use nom::IResult;
use nom::sequence::terminated;
use crate::parser::{argument, end, keyword};

/// Parse a keyword followed by exactly one argument, e.g. `DELETE 3` or `ON 2025-08-10`.
/// The argument is returned as typed.
pub(crate) fn with_argument<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    move |input: &'a str| {
        let (input, _) = keyword(word)(input)?;
        let (input, index) = terminated(argument, end)(input)?;
        Ok((input, index.to_string()))
    }
}
