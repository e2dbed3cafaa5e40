use std::str::FromStr;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use crate::common::{Error, ResultError};
use crate::task::Priority;
use crate::transaction::Category;

lazy_static! {
    static ref YYYY_MM_DD: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Parse a calendar date written as `YYYY-MM-DD`.
pub(crate) fn parse_date(text: &str) -> ResultError<NaiveDate> {
    let text = text.trim();
    if !YYYY_MM_DD.is_match(text) {
        return Err(Error::format(format!("'{text}' is not a date, please use YYYY-MM-DD")));
    }

    // Pattern matched but the day may still not exist, e.g. 2025-02-30
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| Error::format(format!("'{text}' is not a valid calendar date")))
}

/// Parse a non-negative amount of money.
pub(crate) fn parse_amount(text: &str) -> ResultError<Decimal> {
    let text = text.trim();
    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::format(format!("'{text}' is not a number")))?;

    if amount < Decimal::ZERO {
        return Err(Error::range(format!("amount {amount} is negative")));
    }
    Ok(amount)
}

pub(crate) fn parse_priority(text: &str) -> ResultError<Priority> {
    match text.trim().to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(Error::range(format!("'{other}' is not a priority, use low, medium or high"))),
    }
}

/// Parse month and year entered as separate numbers. Month must be 1 to 12, year is not checked.
pub(crate) fn parse_month_year(month_text: &str, year_text: &str) -> ResultError<(u32, i32)> {
    let (month_text, year_text) = (month_text.trim(), year_text.trim());
    if !is_digits(month_text) || !is_digits(year_text) {
        return Err(Error::format("month and year must be numbers"));
    }

    let month = month_text.parse::<u32>().map_err(|_| Error::format(format!("'{month_text}' is not a month")))?;
    let year = year_text.parse::<i32>().map_err(|_| Error::format(format!("'{year_text}' is not a year")))?;
    if !(1..=12).contains(&month) {
        return Err(Error::range("month must be between 1 and 12"));
    }

    Ok((month, year))
}

/// Trim and title-case a category name. Membership of the closed set is checked by [`parse_category`].
pub(crate) fn normalize_category(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.trim().chars() {
        if previous_is_letter {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    normalized
}

pub(crate) fn parse_category(text: &str) -> ResultError<Category> {
    let normalized = normalize_category(text);
    Category::from_str(&normalized)
        .map_err(|_| Error::range(format!("invalid category '{normalized}'")))
}

/// Parse a 1-based position in a listing. Bounds are checked by the store.
pub(crate) fn parse_index(text: &str) -> ResultError<usize> {
    let text = text.trim();
    if !is_digits(text) {
        return Err(Error::format(format!("'{text}' is not a number")));
    }
    text.parse::<usize>().map_err(|_| Error::format(format!("'{text}' is not a valid index")))
}

pub(crate) fn parse_title(text: &str) -> ResultError<String> {
    let title = text.trim();
    if title.is_empty() {
        return Err(Error::range("title cannot be empty"));
    }
    Ok(title.to_string())
}

pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-08-02").unwrap(), NaiveDate::from_ymd_opt(2025, 8, 2).unwrap());
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(matches!(parse_date("2025-02-30"), Err(Error::Format(_))));
        assert!(matches!(parse_date("2025-13-01"), Err(Error::Format(_))));
        assert!(matches!(parse_date("2025-8-2"), Err(Error::Format(_))));
        assert!(matches!(parse_date("02/08/2025"), Err(Error::Format(_))));
        assert!(matches!(parse_date("2025-08-02T10:00:00"), Err(Error::Format(_))));
        assert!(matches!(parse_date(""), Err(Error::Format(_))));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("20").unwrap(), dec("20"));
        assert_eq!(parse_amount("18.50").unwrap(), dec("18.5"));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("-0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("1e2").unwrap(), dec("100"));

        assert!(matches!(parse_amount("-5"), Err(Error::Range(_))));
        assert!(matches!(parse_amount("abc"), Err(Error::Format(_))));
        assert!(matches!(parse_amount(""), Err(Error::Format(_))));
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("High").unwrap(), Priority::High);
        assert_eq!(parse_priority("MEDIUM").unwrap(), Priority::Medium);
        assert_eq!(parse_priority("low").unwrap(), Priority::Low);
        assert!(matches!(parse_priority("urgent"), Err(Error::Range(_))));
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(parse_month_year("8", "2025").unwrap(), (8, 2025));
        assert_eq!(parse_month_year("12", "0").unwrap(), (12, 0));

        assert!(matches!(parse_month_year("13", "2025"), Err(Error::Range(_))));
        assert!(matches!(parse_month_year("0", "2025"), Err(Error::Range(_))));
        assert!(matches!(parse_month_year("aug", "2025"), Err(Error::Format(_))));
        assert!(matches!(parse_month_year("8", "-2025"), Err(Error::Format(_))));
        assert!(matches!(parse_month_year("", "2025"), Err(Error::Format(_))));
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("  food "), "Food");
        assert_eq!(normalize_category("ENTERTAINMENT"), "Entertainment");
        assert_eq!(normalize_category("eating out"), "Eating Out");
        assert_eq!(normalize_category("o'neil"), "O'Neil");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(" utilities").unwrap(), Category::Utilities);
        match parse_category("groceries") {
            Err(Error::Range(msg)) => assert!(msg.contains("Groceries")),
            other => panic!("Unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_parse_index_and_title() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert!(matches!(parse_index("three"), Err(Error::Format(_))));
        assert!(matches!(parse_index("-1"), Err(Error::Format(_))));

        assert_eq!(parse_title("  Pay rent ").unwrap(), "Pay rent");
        assert!(matches!(parse_title("   "), Err(Error::Range(_))));
    }
}
