use chrono::Datelike;
use rust_decimal::Decimal;
use crate::common::{Error, ResultError};
use crate::transaction::{Category, Transaction};
use crate::validate::parse_category;

/// Transactions filed under `category`. An unknown category is an error, not an empty result.
pub(crate) fn filter_by_category<'a>(records: &'a [Transaction], category: &str) -> ResultError<Vec<&'a Transaction>> {
    let category = parse_category(category)?;
    Ok(records.iter().filter(|t| t.matches_category(category)).collect())
}

pub(crate) fn total<'a>(records: impl IntoIterator<Item = &'a Transaction>) -> ResultError<Decimal> {
    records.into_iter().try_fold(Decimal::ZERO, |sum, t| add(sum, t.amount()))
}

fn add(a: Decimal, b: Decimal) -> ResultError<Decimal> {
    a.checked_add(b).ok_or_else(|| Error::range("total is too large"))
}

/// Total of every category of the closed set, in listing order, including empty ones.
pub(crate) fn totals_by_category(records: &[Transaction]) -> ResultError<Vec<(Category, Decimal)>> {
    Category::ALL.iter()
        .map(|c| Ok((*c, total(records.iter().filter(|t| t.matches_category(*c)))?)))
        .collect()
}

/// Spending of one calendar month
#[derive(Debug, PartialEq)]
pub(crate) struct MonthlySummary {
    pub(crate) month: u32,
    pub(crate) year: i32,
    /// Category totals, in order of first appearance in the month
    pub(crate) by_category: Vec<(Category, Decimal)>,
    pub(crate) total: Decimal,
}

impl MonthlySummary {
    pub(crate) fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Category with the largest total. On a tie the category that appeared first wins.
    pub(crate) fn highest(&self) -> Option<(Category, Decimal)> {
        let mut highest: Option<(Category, Decimal)> = None;
        for (category, amount) in &self.by_category {
            match highest {
                Some((_, max)) if *amount <= max => {}
                _ => highest = Some((*category, *amount)),
            }
        }
        highest
    }
}

pub(crate) fn group_by_month(records: &[Transaction], month: u32, year: i32) -> ResultError<MonthlySummary> {
    let mut by_category: Vec<(Category, Decimal)> = vec![];
    let mut grand_total = Decimal::ZERO;

    for t in records.iter().filter(|t| t.date().month() == month && t.date().year() == year) {
        match by_category.iter_mut().find(|(c, _)| *c == t.category()) {
            Some((_, subtotal)) => *subtotal = add(*subtotal, t.amount())?,
            None => by_category.push((t.category(), t.amount())),
        }
        grand_total = add(grand_total, t.amount())?;
    }

    Ok(MonthlySummary { month, year, by_category, total: grand_total })
}
