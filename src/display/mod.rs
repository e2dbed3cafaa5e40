//! Text rendering of query results. Every function returns the text, the sessions print it.

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Color, Table, TableComponent};
use rust_decimal::{Decimal, RoundingStrategy};
use crate::query::expenses::MonthlySummary;
use crate::query::tasks::DatePartition;
use crate::task::Task;
use crate::transaction::{Category, Transaction};

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

/// Format $ amount, rounding half away from zero to cents
pub(crate) fn format_amount(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{amount:.2}")
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Numbered listing, numbers start at 1
pub(crate) fn transactions(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Date", "Amount", "Category", "Note"]);
    for (i, t) in transactions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(format_date(t.date())),
            Cell::new(format_amount(t.amount())).set_alignment(CellAlignment::Right),
            Cell::new(t.category()),
            Cell::new(t.note()),
        ]);
    }
    table.to_string()
}

pub(crate) fn category_totals(totals: &[(Category, Decimal)]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Category", "Total"]);
    for (category, total) in totals {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(format_amount(*total)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub(crate) fn categories() -> String {
    Category::ALL.iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect::<Vec<String>>()
        .join("\n")
}

pub(crate) fn monthly_summary(summary: &MonthlySummary) -> String {
    let heading = format!("Summary for {}/{}:", summary.month, summary.year);
    let highest = match summary.highest() {
        Some((category, _)) => category,
        None => return format!("{heading}\nNo transactions found."),
    };

    format!(
        "{heading}\n{}\nHighest spending category: {highest}\nTotal spending: {}",
        category_totals(&summary.by_category),
        format_amount(summary.total),
    )
}

/// Numbered listing of tasks. Open tasks due before `today` are highlighted.
pub(crate) fn tasks(tasks: &[&Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Title", "Due", "Priority", "Status"]);
    for (i, t) in tasks.iter().enumerate() {
        let status = if t.is_completed() { "done" } else { "open" };
        let row = vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(t.title()),
            Cell::new(format_date(t.due_date())),
            Cell::new(t.priority()),
            Cell::new(status),
        ];
        if t.is_overdue(today) {
            table.add_row(row.into_iter().map(|c| c.fg(Color::Red)).collect::<Vec<Cell>>());
        } else {
            table.add_row(row);
        }
    }
    table.to_string()
}

pub(crate) fn date_partition(partition: &DatePartition, reference: NaiveDate) -> String {
    let reference = format_date(reference);
    let section = |tasks: &[&Task], heading: String, none: String| {
        if tasks.is_empty() {
            none
        } else {
            let titles: Vec<String> = tasks.iter().enumerate().map(|(i, t)| format!("{}. {}", i + 1, t.title())).collect();
            format!("{heading}\n{}", titles.join("\n"))
        }
    };

    [
        section(&partition.overdue, "Overdue tasks:".to_string(), format!("No overdue tasks found as of {reference}.")),
        section(&partition.present, format!("Tasks due on {reference}:"), format!("No tasks found on {reference}.")),
        section(&partition.upcoming, "Upcoming tasks:".to_string(), format!("No upcoming tasks found after {reference}.")),
    ].join("\n\n")
}

/// Alert printed when a tasks session starts
pub(crate) fn overdue_alert(count: usize) -> String {
    match count {
        1 => "You have 1 overdue task!".to_string(),
        n => format!("You have {n} overdue tasks!"),
    }
}

#[cfg(test)]
mod tests {
    use crate::query::expenses::group_by_month;
    use crate::query::tasks::partition_by_date;
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(5, 0)), "5.00");
        assert_eq!(format_amount(Decimal::new(1850, 2)), "18.50");
        assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
    }

    #[test]
    fn test_transactions_listing() {
        let records = vec![
            Transaction::parse("2025-08-02", "20", "Food", "Lunch").unwrap(),
            Transaction::parse("2025-08-12", "100", "Utilities", "Water bill").unwrap(),
        ];
        let text = transactions(&records.iter().collect::<Vec<&Transaction>>());
        assert!(text.contains("2025-08-12"));
        assert!(text.contains("100.00"));
        assert!(text.contains("Water bill"));
        assert_eq!(transactions(&[]), "No transactions found.");
    }

    #[test]
    fn test_monthly_summary() {
        let records = vec![
            Transaction::parse("2025-08-02", "20", "Food", "Lunch").unwrap(),
            Transaction::parse("2025-08-12", "100", "Utilities", "Water bill").unwrap(),
        ];
        let text = monthly_summary(&group_by_month(&records, 8, 2025).unwrap());
        assert!(text.starts_with("Summary for 8/2025:"));
        assert!(text.contains("Highest spending category: Utilities"));
        assert!(text.ends_with("Total spending: 120.00"));

        let text = monthly_summary(&group_by_month(&records, 9, 2025).unwrap());
        assert_eq!(text, "Summary for 9/2025:\nNo transactions found.");
    }

    #[test]
    fn test_date_partition() {
        let records = vec![
            Task::parse("2025-08-01", "high", "Pay rent").unwrap(),
            Task::parse("2025-08-20", "low", "Book dentist").unwrap(),
        ];
        let reference = date("2025-08-10");
        let text = date_partition(&partition_by_date(&records, reference), reference);
        assert_eq!(text, "Overdue tasks:\n1. Pay rent\n\n\
            No tasks found on 2025-08-10.\n\n\
            Upcoming tasks:\n1. Book dentist");
    }

    #[test]
    fn test_categories() {
        assert_eq!(categories(), "1. Food\n2. Transport\n3. Utilities\n4. Entertainment\n5. Misc");
    }

    #[test]
    fn test_overdue_alert() {
        assert_eq!(overdue_alert(0), "You have 0 overdue tasks!");
        assert_eq!(overdue_alert(1), "You have 1 overdue task!");
        assert_eq!(overdue_alert(3), "You have 3 overdue tasks!");
    }
}
