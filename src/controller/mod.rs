//! Runs parsed commands against a [`Store`] and the query functions, and renders the
//! results through [`crate::display`].

use log::info;
use crate::common::ResultError;
use crate::csv_store::CsvFile;
use crate::db::{Record, Store};

mod expenses;
mod tasks;

pub(crate) use expenses::ExpenseSession;
pub(crate) use tasks::TaskSession;

/// What the shell does after a command
#[derive(Debug, PartialEq)]
pub(crate) enum Reply {
    Print(String),
    Exit,
}

/// One interactive session over a single collection
pub(crate) trait Session {
    const PROMPT: &'static str;

    /// Command words offered for completion
    const KEYWORDS: &'static [&'static str];

    /// Printed once before the first prompt
    fn greeting(&self) -> Option<String> {
        None
    }

    fn execute(&mut self, line: &str) -> ResultError<Reply>;
}

/// Write the whole collection to `file_path` in the same CSV layout as the data file.
fn export<R: Record>(store: &Store<R>, file_path: &str) -> ResultError<Reply> {
    let target = CsvFile::<R>::new(file_path);
    store.export(&target)?;
    info!("Exported {} records to {}", store.len(), target.path().display());
    Ok(Reply::Print(format!("Report exported to {file_path}")))
}
