use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use crate::common::{Error, ResultError};
use crate::db::{Persistence, Record};


/// Keeps records in a CSV file with a header row. Every save rewrites the whole file.
pub(crate) struct CsvFile<R> {
    path: PathBuf,
    record: PhantomData<fn() -> R>,
}

impl<R: Record> CsvFile<R> {
    pub(crate) fn new(path: impl Into<PathBuf>) -> CsvFile<R> {
        CsvFile { path: path.into(), record: PhantomData }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Record> Persistence<R> for CsvFile<R> {
    fn load(&self) -> ResultError<Vec<R>> {
        if !self.path.exists() {
            info!("{} not found, starting with no records", self.path.display());
            return Ok(vec![]);
        }

        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let mut records = vec![];
        for (i, row) in rdr.deserialize::<R::Row>().enumerate() {
            // Line 1 is the header
            let line = i + 2;
            let row = row.map_err(|e| at_line(e.into(), line))?;
            records.push(R::from_row(row).map_err(|e| at_line(e, line))?);
        }

        Ok(records)
    }

    fn save(&self, records: &[R]) -> ResultError<()> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&self.path)?;
        // Written by hand so an empty collection still gets its header row
        wtr.write_record(R::HEADERS)?;
        for r in records {
            wtr.serialize(r.to_row())?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn at_line(e: Error, line: usize) -> Error {
    match e {
        Error::Format(msg) => Error::Format(format!("line {line}: {msg}")),
        Error::Range(msg) => Error::Range(format!("line {line}: {msg}")),
        io => io,
    }
}
