use chrono::NaiveDate;
use crate::common::{Error, ResultError};
use crate::task::{Priority, Task};

/// Tasks whose title contains `keyword`, ignoring case. An empty keyword is an error.
pub(crate) fn search<'a>(records: &'a [Task], keyword: &str) -> ResultError<Vec<&'a Task>> {
    if keyword.is_empty() {
        return Err(Error::format("keyword cannot be empty"));
    }
    let keyword = keyword.to_lowercase();
    Ok(records.iter().filter(|t| t.title().to_lowercase().contains(&keyword)).collect())
}

/// Tasks split around a reference date.
#[derive(Debug, Default)]
pub(crate) struct DatePartition<'a> {
    /// Due before the reference date and still open
    pub(crate) overdue: Vec<&'a Task>,
    /// Due on the reference date, completed or not
    pub(crate) present: Vec<&'a Task>,
    /// Due after the reference date and still open
    pub(crate) upcoming: Vec<&'a Task>,
}

/// Completed tasks due before or after `reference` are in none of the three groups.
pub(crate) fn partition_by_date(records: &[Task], reference: NaiveDate) -> DatePartition<'_> {
    let mut partition = DatePartition::default();
    for t in records {
        if t.due_date() == reference {
            partition.present.push(t);
        } else if t.is_completed() {
            continue;
        } else if t.due_date() < reference {
            partition.overdue.push(t);
        } else {
            partition.upcoming.push(t);
        }
    }
    partition
}

pub(crate) fn overdue(records: &[Task], today: NaiveDate) -> Vec<&Task> {
    records.iter().filter(|t| t.is_overdue(today)).collect()
}

pub(crate) fn filter_by_priority(records: &[Task], priority: Priority) -> Vec<&Task> {
    records.iter().filter(|t| t.priority() == priority).collect()
}

/// Most urgent first. Tasks of the same priority keep their insertion order.
pub(crate) fn sort_by_priority(records: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = records.iter().collect();
    sorted.sort_by(|a, b| b.priority().rank().cmp(&a.priority().rank()));
    sorted
}
