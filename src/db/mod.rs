use std::fmt;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::common::{Error, ResultError};
use crate::task::Task;
use crate::transaction::Transaction;

/// A record kept by a [`Store`]. Records have no id, they are addressed by their position.
pub(crate) trait Record: Clone + fmt::Debug + Sized {
    /// Flat representation written to and read from persistence
    type Row: Serialize + DeserializeOwned;

    /// Column names, in the order of the fields of [`Record::Row`]
    const HEADERS: &'static [&'static str];

    fn to_row(&self) -> Self::Row;

    /// Build a record from a persisted row, running the same validation as user input.
    fn from_row(row: Self::Row) -> ResultError<Self>;

    /// The date the record is filed under, used for date ordering.
    fn date(&self) -> NaiveDate;
}

/// Where a store keeps its records between sessions.
pub(crate) trait Persistence<R: Record> {
    /// Load every record. A missing backing file is an empty collection.
    fn load(&self) -> ResultError<Vec<R>>;

    /// Replace the persisted collection with `records`.
    fn save(&self, records: &[R]) -> ResultError<()>;
}

/// Owns the ordered collection of records of one session. Every mutation rewrites the whole
/// collection through the persistence adapter. If that fails the mutation is rolled back.
pub(crate) struct Store<R: Record> {
    records: Vec<R>,
    persistence: Box<dyn Persistence<R>>,
}

impl<R: Record> Store<R> {
    /// Create a store from the records already persisted
    pub(crate) fn open(persistence: Box<dyn Persistence<R>>) -> ResultError<Store<R>> {
        let records = persistence.load()?;
        info!("Loaded {} records", records.len());
        Ok(Store { records, persistence })
    }

    /// Current records in insertion order. Fetch again after any mutation.
    pub(crate) fn all(&self) -> &[R] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append an already validated record and persist.
    pub(crate) fn append(&mut self, record: R) -> ResultError<&R> {
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(&self.records[self.records.len() - 1])
    }

    /// Remove the record at 1-based `index` and persist. Returns the removed record.
    pub(crate) fn remove(&mut self, index: usize) -> ResultError<R> {
        let i = self.position(index)?;
        let removed = self.records.remove(i);
        if let Err(e) = self.save() {
            self.records.insert(i, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Write the current collection to another destination, e.g. a report file.
    pub(crate) fn export(&self, target: &dyn Persistence<R>) -> ResultError<()> {
        target.save(&self.records)
    }

    /// Convert a 1-based index into a position in `records`
    fn position(&self, index: usize) -> ResultError<usize> {
        if self.records.is_empty() {
            return Err(Error::range(format!("no record number {index}, the list is empty")));
        }
        if index == 0 || index > self.records.len() {
            return Err(Error::range(format!("no record number {index}, choose 1 to {}", self.records.len())));
        }
        Ok(index - 1)
    }

    fn save(&self) -> ResultError<()> {
        debug!("Saving {} records", self.records.len());
        self.persistence.save(&self.records).map_err(|e| {
            warn!("Unable to save records: {e}");
            e
        })
    }
}

impl Store<Transaction> {
    /// Validate and append a transaction.
    pub(crate) fn add(&mut self, date: &str, amount: &str, category: &str, note: &str) -> ResultError<&Transaction> {
        let transaction = Transaction::parse(date, amount, category, note)?;
        self.append(transaction)
    }
}

impl Store<Task> {
    /// Validate and append a task.
    pub(crate) fn add(&mut self, due_date: &str, priority: &str, title: &str) -> ResultError<&Task> {
        let task = Task::parse(due_date, priority, title)?;
        self.append(task)
    }

    /// Mark the task at 1-based `index` as completed. Marking a completed task again succeeds.
    pub(crate) fn mark_done(&mut self, index: usize) -> ResultError<&Task> {
        let i = self.position(index)?;
        let was_open = self.records[i].mark_done();
        if was_open {
            if let Err(e) = self.save() {
                self.records[i].reopen();
                return Err(e);
            }
        }
        Ok(&self.records[i])
    }
}
