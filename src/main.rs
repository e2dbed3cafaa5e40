use std::path::{Path, PathBuf};
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::warn;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::config::Config;
use crate::controller::{ExpenseSession, Reply, Session, TaskSession};
use crate::csv_store::CsvFile;
use crate::db::{Record, Store};
use crate::editor::TallyHelper;
use crate::task::Task;
use crate::transaction::Transaction;

mod common;
mod config;
mod controller;
mod csv_store;
mod db;
mod display;
mod editor;
mod parser;
mod query;
mod task;
mod transaction;
mod validate;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Config file, defaults to <config dir>/tally/config.toml
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record and summarise spending
    Expenses {
        /// CSV data file, overrides the config file
        #[clap(long)]
        file: Option<PathBuf>,
    },
    /// Keep a to-do list with due dates and priorities
    Tasks {
        /// CSV data file, overrides the config file
        #[clap(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default(),
    };
    let history_file = config.history_file();

    match cli.command {
        Command::Expenses { file } => {
            let store = open_store::<Transaction>(file.unwrap_or_else(|| config.expenses_file()))?;
            run_session(ExpenseSession::new(store), &history_file)
        }
        Command::Tasks { file } => {
            let store = open_store::<Task>(file.unwrap_or_else(|| config.tasks_file()))?;
            run_session(TaskSession::new(store, today), &history_file)
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_store<R: Record + 'static>(path: PathBuf) -> anyhow::Result<Store<R>> {
    let file = CsvFile::<R>::new(&path);
    Store::open(Box::new(file)).with_context(|| format!("Unable to load {}", path.display()))
}

fn run_session<S: Session>(mut session: S, history_file: &Path) -> anyhow::Result<()> {
    let mut rl = Editor::<TallyHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(TallyHelper::new(S::KEYWORDS, S::PROMPT)));
    if let Err(e) = rl.load_history(history_file) {
        warn!("No previous history in {}: {e}", history_file.display());
    }

    if let Some(greeting) = session.greeting() {
        println!("{greeting}");
    }

    loop {
        let readline = rl.readline(S::PROMPT);
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match session.execute(line) {
                    Ok(Reply::Print(output)) => println!("{output}"),
                    Ok(Reply::Exit) => break,
                    Err(err) => println!("{err}"),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(e) = rl.save_history(history_file) {
        warn!("Unable to save history to {}: {e}", history_file.display());
    }
    Ok(())
}
