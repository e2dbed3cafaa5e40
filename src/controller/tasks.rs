use chrono::NaiveDate;
use crate::common::ResultError;
use crate::controller::{export, Reply, Session};
use crate::db::Store;
use crate::display;
use crate::parser::tasks::{parse, Statement};
use crate::query::sort_by_date;
use crate::query::tasks::{filter_by_priority, overdue, partition_by_date, search, sort_by_priority};
use crate::task::Task;
use crate::validate::{parse_date, parse_index, parse_priority};

const HELP: &str = "\
ADD <due date> <priority> <title>   add a task, priority is low, medium or high
LIST                                list all tasks
DONE <n>                            mark task number n as completed
DELETE <n>                          delete task number n
SEARCH <keyword>                    tasks whose title contains keyword
ON <date>                           overdue, due and upcoming tasks around a date
OVERDUE                             open tasks past their due date
PRIORITY <priority>                 tasks of one priority
SORT DATE | SORT PRIORITY           list tasks by due date or by priority
EXPORT TO <file>                    write all tasks to a CSV file
EXIT                                leave";

pub(crate) struct TaskSession {
    store: Store<Task>,
    /// Source of the current date
    today: fn() -> NaiveDate,
}

impl TaskSession {
    pub(crate) fn new(store: Store<Task>, today: fn() -> NaiveDate) -> TaskSession {
        TaskSession { store, today }
    }
}

impl Session for TaskSession {
    const PROMPT: &'static str = "tasks> ";

    const KEYWORDS: &'static [&'static str] = &[
        "ADD", "LIST", "DONE", "DELETE", "SEARCH", "ON", "OVERDUE", "PRIORITY",
        "SORT", "DATE", "EXPORT", "TO", "HELP", "EXIT", "QUIT",
    ];

    fn greeting(&self) -> Option<String> {
        let count = overdue(self.store.all(), (self.today)()).len();
        Some(display::overdue_alert(count))
    }

    fn execute(&mut self, line: &str) -> ResultError<Reply> {
        let today = (self.today)();
        let output = match parse(line)? {
            Statement::Add { due_date, priority, title } => {
                let task = self.store.add(&due_date, &priority, &title)?;
                format!("Task added: {} (due {}, {} priority)", task.title(), display::format_date(task.due_date()), task.priority())
            }
            Statement::List => display::tasks(&self.store.all().iter().collect::<Vec<_>>(), today),
            Statement::Done(index) => {
                let task = self.store.mark_done(parse_index(&index)?)?;
                format!("The task '{}' is marked as completed.", task.title())
            }
            Statement::Delete(index) => {
                let removed = self.store.remove(parse_index(&index)?)?;
                format!("Deleted task: {}", removed.title())
            }
            Statement::Search(keyword) => {
                let found = search(self.store.all(), &keyword)?;
                if found.is_empty() {
                    format!("No tasks found using the keyword: {keyword}.")
                } else {
                    display::tasks(&found, today)
                }
            }
            Statement::On(date) => {
                let reference = parse_date(&date)?;
                display::date_partition(&partition_by_date(self.store.all(), reference), reference)
            }
            Statement::Overdue => {
                let found = overdue(self.store.all(), today);
                if found.is_empty() {
                    "No overdue tasks.".to_string()
                } else {
                    display::tasks(&found, today)
                }
            }
            Statement::Priority(priority) => {
                let priority = parse_priority(&priority)?;
                let found = filter_by_priority(self.store.all(), priority);
                if found.is_empty() {
                    format!("No tasks with {priority} priority.")
                } else {
                    display::tasks(&found, today)
                }
            }
            Statement::SortByDate => display::tasks(&sort_by_date(self.store.all()), today),
            Statement::SortByPriority => display::tasks(&sort_by_priority(self.store.all()), today),
            Statement::Export(file_path) => return export(&self.store, &file_path),
            Statement::Help => HELP.to_string(),
            Statement::Exit => return Ok(Reply::Exit),
        };
        Ok(Reply::Print(output))
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Error;
    use crate::db::tests::Memory;
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
    }

    fn new_session(tasks: &[(&str, &str, &str)]) -> (TaskSession, Memory<Task>) {
        let records = tasks.iter().map(|(d, p, t)| Task::parse(d, p, t).unwrap()).collect();
        let memory: Memory<Task> = Memory::new(records);
        let handle = memory.handle();
        (TaskSession::new(Store::open(Box::new(memory)).unwrap(), today), handle)
    }

    fn print(session: &mut TaskSession, line: &str) -> String {
        match session.execute(line).unwrap() {
            Reply::Print(text) => text,
            Reply::Exit => panic!("unexpected exit for '{line}'"),
        }
    }

    #[test]
    fn test_greeting_counts_overdue() {
        let (session, _memory) = new_session(&[
            ("2025-08-01", "high", "Pay rent"),
            ("2025-08-05", "low", "Water plants"),
            ("2025-08-20", "low", "Book flights"),
        ]);
        assert_eq!(session.greeting(), Some("You have 2 overdue tasks!".to_string()));

        let (session, _memory) = new_session(&[("2025-08-20", "low", "Book flights")]);
        assert_eq!(session.greeting(), Some("You have 0 overdue tasks!".to_string()));
    }

    #[test]
    fn test_add_done_delete() {
        let (mut session, memory) = new_session(&[]);
        assert_eq!(print(&mut session, "ADD 2025-08-12 HIGH Call the bank"), "Task added: Call the bank (due 2025-08-12, high priority)");
        assert!(matches!(session.execute("ADD 2025-08-12 urgent Call"), Err(Error::Range(_))));
        assert!(matches!(session.execute("ADD 2025-08-12 low"), Err(Error::Range(_))));

        assert_eq!(print(&mut session, "DONE 1"), "The task 'Call the bank' is marked as completed.");
        assert!(memory.saved.borrow()[0].is_completed());
        assert_eq!(print(&mut session, "done 1"), "The task 'Call the bank' is marked as completed.");

        assert_eq!(print(&mut session, "DELETE 1"), "Deleted task: Call the bank");
        assert!(matches!(session.execute("DONE 1"), Err(Error::Range(_))));
        assert!(memory.saved.borrow().is_empty());
    }

    #[test]
    fn test_search() {
        let (mut session, _memory) = new_session(&[("2025-08-20", "low", "Book flights")]);
        assert!(print(&mut session, "SEARCH flight").contains("Book flights"));
        assert_eq!(print(&mut session, "SEARCH hotel"), "No tasks found using the keyword: hotel.");
        assert!(matches!(session.execute("SEARCH"), Err(Error::Format(_))));
    }

    #[test]
    fn test_on_date() {
        let (mut session, _memory) = new_session(&[
            ("2025-08-01", "high", "Pay rent"),
            ("2025-08-10", "low", "Water plants"),
        ]);
        let text = print(&mut session, "ON 2025-08-10");
        assert!(text.starts_with("Overdue tasks:\n1. Pay rent"));
        assert!(text.contains("Tasks due on 2025-08-10:\n1. Water plants"));
        assert!(text.ends_with("No upcoming tasks found after 2025-08-10."));
        assert!(matches!(session.execute("ON tomorrow"), Err(Error::Format(_))));
    }

    #[test]
    fn test_priority_and_overdue() {
        let (mut session, _memory) = new_session(&[
            ("2025-08-01", "high", "Pay rent"),
            ("2025-08-20", "low", "Book flights"),
        ]);
        assert!(print(&mut session, "PRIORITY high").contains("Pay rent"));
        assert_eq!(print(&mut session, "PRIORITY medium"), "No tasks with medium priority.");
        assert!(matches!(session.execute("PRIORITY urgent"), Err(Error::Range(_))));

        let overdue = print(&mut session, "OVERDUE");
        assert!(overdue.contains("Pay rent"));
        assert!(!overdue.contains("Book flights"));

        print(&mut session, "DONE 1");
        assert_eq!(print(&mut session, "OVERDUE"), "No overdue tasks.");
    }

    #[test]
    fn test_sorting_keeps_store_order() {
        let (mut session, _memory) = new_session(&[
            ("2025-08-20", "low", "Book flights"),
            ("2025-08-01", "high", "Pay rent"),
        ]);
        let by_date = print(&mut session, "SORT DATE");
        assert!(by_date.find("Pay rent").unwrap() < by_date.find("Book flights").unwrap());
        let by_priority = print(&mut session, "sort priority");
        assert!(by_priority.find("Pay rent").unwrap() < by_priority.find("Book flights").unwrap());

        assert_eq!(session.store.all()[0].title(), "Book flights");
        assert_eq!(session.execute("QUIT").unwrap(), Reply::Exit);
    }
}
