//! Read-only queries over a store's records. Nothing here mutates or prints.

pub(crate) mod expenses;
pub(crate) mod tasks;

use crate::db::Record;

/// Records in ascending date order. Records sharing a date keep their insertion order.
pub(crate) fn sort_by_date<R: Record>(records: &[R]) -> Vec<&R> {
    let mut sorted: Vec<&R> = records.iter().collect();
    sorted.sort_by_key(|r| r.date());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use crate::transaction::Transaction;

    #[test]
    fn test_sort_by_date_is_stable() {
        let tasks = vec![
            Task::parse("2025-08-20", "low", "c").unwrap(),
            Task::parse("2025-08-01", "low", "a").unwrap(),
            Task::parse("2025-08-20", "high", "d").unwrap(),
            Task::parse("2025-08-10", "low", "b").unwrap(),
        ];
        let titles: Vec<&str> = sort_by_date(&tasks).into_iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_transactions_by_date() {
        let transactions = vec![
            Transaction::parse("2025-09-01", "1", "Food", "later").unwrap(),
            Transaction::parse("2025-08-01", "2", "Food", "earlier").unwrap(),
        ];
        let notes: Vec<&str> = sort_by_date(&transactions).into_iter().map(|t| t.note()).collect();
        assert_eq!(notes, vec!["earlier", "later"]);
        assert!(sort_by_date::<Transaction>(&[]).is_empty());
    }
}
