use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::common::ResultError;
use crate::db::Record;
use crate::validate::{parse_amount, parse_category, parse_date};

/// Closed set of spending categories. Declaration order is the listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Misc,
}

impl Category {
    pub(crate) const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Misc,
    ];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Misc => "Misc",
        }
    }

    /// Look up a category by its 1-based position in [`Category::ALL`]
    pub(crate) fn from_number(number: usize) -> Option<Category> {
        number.checked_sub(1).and_then(|i| Category::ALL.get(i).copied())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Exact match on the normalized name, see [`crate::validate::normalize_category`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.iter().find(|c| c.as_str() == s).copied().ok_or(())
    }
}

/// A spending record. Immutable once created, a correction is a delete followed by a new add.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    date: NaiveDate,
    amount: Decimal,
    category: Category,
    note: String,
}

impl Transaction {
    /// Validate raw input in the order date, amount, category. The first failure is returned.
    pub(crate) fn parse(date: &str, amount: &str, category: &str, note: &str) -> ResultError<Transaction> {
        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;
        let category = parse_category(category)?;
        Ok(Transaction::new(date, amount, category, note))
    }

    pub(crate) fn new(date: NaiveDate, amount: Decimal, category: Category, note: &str) -> Transaction {
        Transaction { date, amount, category, note: note.to_string() }
    }

    pub(crate) fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn amount(&self) -> Decimal {
        self.amount
    }

    pub(crate) fn category(&self) -> Category {
        self.category
    }

    pub(crate) fn note(&self) -> &str {
        &self.note
    }

    pub(crate) fn matches_category(&self, category: Category) -> bool {
        self.category == category
    }
}

/// A transaction as it is laid out in the CSV file
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct TransactionRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Note", default)]
    note: String,
}

impl Record for Transaction {
    type Row = TransactionRow;

    const HEADERS: &'static [&'static str] = &["Date", "Amount", "Category", "Note"];

    fn to_row(&self) -> TransactionRow {
        TransactionRow {
            date: self.date.format("%Y-%m-%d").to_string(),
            amount: self.amount.to_string(),
            category: self.category.to_string(),
            note: self.note.clone(),
        }
    }

    fn from_row(row: TransactionRow) -> ResultError<Transaction> {
        Transaction::parse(&row.date, &row.amount, &row.category, &row.note)
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
