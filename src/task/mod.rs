use std::fmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::common::{Error, ResultError};
use crate::db::Record;
use crate::validate::{parse_date, parse_priority, parse_title};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank, higher is more urgent
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A to-do item. `completed` only ever goes from false to true.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Task {
    title: String,
    due_date: NaiveDate,
    priority: Priority,
    completed: bool,
}

impl Task {
    /// Validate raw input in the order due date, priority, title.
    pub(crate) fn parse(due_date: &str, priority: &str, title: &str) -> ResultError<Task> {
        let due_date = parse_date(due_date)?;
        let priority = parse_priority(priority)?;
        let title = parse_title(title)?;
        Ok(Task { title, due_date, priority, completed: false })
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub(crate) fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns whether the task was still open before this call
    pub(crate) fn mark_done(&mut self) -> bool {
        let was_open = !self.completed;
        self.completed = true;
        was_open
    }

    /// Put back a task completed by [`Task::mark_done`] when the change could not be persisted
    pub(crate) fn reopen(&mut self) {
        self.completed = false;
    }

    pub(crate) fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.completed
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct TaskRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "DueDate")]
    due_date: String,
    #[serde(rename = "Priority")]
    priority: String,
    #[serde(rename = "Completed")]
    completed: String,
}

impl Record for Task {
    type Row = TaskRow;

    const HEADERS: &'static [&'static str] = &["Title", "DueDate", "Priority", "Completed"];

    fn to_row(&self) -> TaskRow {
        TaskRow {
            title: self.title.clone(),
            due_date: self.due_date.format("%Y-%m-%d").to_string(),
            priority: self.priority.to_string(),
            completed: self.completed.to_string(),
        }
    }

    fn from_row(row: TaskRow) -> ResultError<Task> {
        let mut task = Task::parse(&row.due_date, &row.priority, &row.title)?;
        task.completed = match row.completed.trim().to_lowercase().as_str() {
            "true" => true,
            "false" | "" => false,
            other => return Err(Error::format(format!("'{other}' is not true or false"))),
        };
        Ok(task)
    }

    fn date(&self) -> NaiveDate {
        self.due_date
    }
}
