use crate::common::ResultError;
use crate::controller::{export, Reply, Session};
use crate::db::Store;
use crate::display;
use crate::parser::expenses::{parse, Statement};
use crate::query::expenses::{filter_by_category, group_by_month, total, totals_by_category};
use crate::query::sort_by_date;
use crate::transaction::{Category, Transaction};
use crate::validate::{is_digits, normalize_category, parse_index, parse_month_year};

const HELP: &str = "\
ADD <date> <amount> [category] [note]   record an expense, category defaults to Misc
LIST                                    list all expenses
DELETE <n>                              delete expense number n
TOTAL [category]                        total spent per category, or on one category
SUMMARY <month> <year>                  spending summary of a month
SORT DATE                               list expenses by date
CATEGORIES                              list categories, by name or number
EXPORT TO <file>                        write all expenses to a CSV file
EXIT                                    leave";

pub(crate) struct ExpenseSession {
    store: Store<Transaction>,
}

impl ExpenseSession {
    pub(crate) fn new(store: Store<Transaction>) -> ExpenseSession {
        ExpenseSession { store }
    }
}

impl Session for ExpenseSession {
    const PROMPT: &'static str = "expenses> ";

    const KEYWORDS: &'static [&'static str] = &[
        "ADD", "LIST", "DELETE", "TOTAL", "SUMMARY", "SORT", "DATE",
        "CATEGORIES", "EXPORT", "TO", "HELP", "EXIT", "QUIT",
    ];

    fn execute(&mut self, line: &str) -> ResultError<Reply> {
        let output = match parse(line)? {
            Statement::Add { date, amount, category, note } => {
                let category = category_argument(category.as_deref());
                let t = self.store.add(&date, &amount, &category, &note)?;
                format!("Expense added: {} {} {}", display::format_date(t.date()), display::format_amount(t.amount()), t.category())
            }
            Statement::List => {
                display::transactions(&self.store.all().iter().collect::<Vec<_>>())
            }
            Statement::Delete(index) => {
                let removed = self.store.remove(parse_index(&index)?)?;
                format!("Deleted expense: {} {} {} {}",
                        display::format_date(removed.date()), display::format_amount(removed.amount()),
                        removed.category(), removed.note()).trim_end().to_string()
            }
            Statement::Total(None) => {
                display::category_totals(&totals_by_category(self.store.all())?)
            }
            Statement::Total(Some(category)) => {
                let matching = filter_by_category(self.store.all(), &category)?;
                format!("Total spent on {}: {}", normalize_category(&category), display::format_amount(total(matching)?))
            }
            Statement::Summary(month, year) => {
                let (month, year) = parse_month_year(&month, &year)?;
                display::monthly_summary(&group_by_month(self.store.all(), month, year)?)
            }
            Statement::SortByDate => display::transactions(&sort_by_date(self.store.all())),
            Statement::Categories => display::categories(),
            Statement::Export(file_path) => return export(&self.store, &file_path),
            Statement::Help => HELP.to_string(),
            Statement::Exit => return Ok(Reply::Exit),
        };
        Ok(Reply::Print(output))
    }
}

/// Category text for a new expense. A number picks from the listed categories, a number
/// outside the list is passed on and rejected as an unknown category.
fn category_argument(category: Option<&str>) -> String {
    match category {
        None => Category::Misc.to_string(),
        Some(text) if is_digits(text) => {
            match parse_index(text).ok().and_then(Category::from_number) {
                Some(category) => category.to_string(),
                None => text.to_string(),
            }
        }
        Some(text) => text.to_string(),
    }
}
