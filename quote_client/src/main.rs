//! Quote Client — a command-line quote keeper. It stores quotes in a local data
//! directory, shows random quotes filtered by category, imports/exports JSON
//! files, and reconciles the local collection with a remote endpoint, either once
//! (`sync`) or on a fixed period (`watch`).
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --data-dir ./quotes-data show --category Life
//! quote_client add --text "Stay hungry, stay foolish." --category Life
//! quote_client --limit 10 watch --interval-secs 30
//! ```
//!
//! Local changes are published on the `EventBus`; the `printer` module is the only
//! place that writes them to the terminal.
#![warn(missing_docs)]
mod args;
mod printer;

use crate::args::{Args, Command};
use clap::Parser;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;
use quote_core::exchange::export_to_file;
use quote_core::store::FileStore;
use quote_core::{
    CycleOutcome, EventBus, HttpRemote, QuoteBook, QuoteError, QuoteEvent, Reconciler, Result,
    SyncConfig, SyncScheduler,
};
use std::fs;
use std::path::PathBuf;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let data_dir = normalize_path(&args.data_dir);
    let bus = EventBus::new();
    let events = bus.subscribe();
    let book = QuoteBook::open(FileStore::open(&data_dir)?, bus)?;
    info!("Quotes loaded from {}: {}", data_dir.display(), book.quotes().len());

    let config = SyncConfig {
        limit: args.limit,
        timeout: Duration::from_secs(args.timeout_secs),
        ..SyncConfig::for_endpoint(&args.server_url)
    };

    let result = run(args.command, book, config, &events);
    drain_events(&events);
    result
}

fn run(
    command: Command,
    mut book: QuoteBook,
    config: SyncConfig,
    events: &Receiver<QuoteEvent>,
) -> Result<()> {
    match command {
        Command::Show { category, format } => {
            if let Some(category) = category {
                book.select_category(&category)?;
            }
            match book.random_quote(&mut rand::rng())? {
                Some(quote) => printer::print_quote(&quote, format)?,
                None if book.quotes().is_empty() => println!("No quotes available. Add some!"),
                None => println!("No quotes available for this category."),
            }
        }
        Command::List { format } => printer::print_quotes(book.quotes(), format)?,
        Command::Categories => {
            let selected = book.selected_category()?;
            for category in book.categories() {
                let marker = if category == selected { "*" } else { " " };
                println!("{} {}", marker, category);
            }
        }
        Command::Add {
            text,
            category,
            offline,
        } => {
            let record = book.add_quote(&text, &category)?;
            println!("Added quote #{}", record.id.unwrap_or_default());
            if !offline {
                let reconciler = reconciler(book, config)?;
                reconciler.submit(&record);
            }
        }
        Command::Import { path } => {
            let path = normalize_path(&path);
            let document = fs::read_to_string(&path)?;
            let count = book.import_json(&document)?;
            println!("Imported {} quotes from {}", count, path.display());
        }
        Command::Export { path } => {
            let path = normalize_path(&path);
            export_to_file(&path, book.quotes())?;
            println!("Exported {} quotes to {}", book.quotes().len(), path.display());
        }
        Command::Sync => {
            let reconciler = reconciler(book, config)?;
            match reconciler.run_cycle()? {
                CycleOutcome::Updated { added, updated } => {
                    println!("Sync complete: {} added, {} updated", added, updated)
                }
                CycleOutcome::Unchanged => println!("Already up to date."),
                // Reported through the bus.
                CycleOutcome::Failed(_) => {}
                CycleOutcome::Skipped => println!("Sync already in progress."),
            }
        }
        Command::Watch { interval_secs } => {
            let config = SyncConfig {
                interval: Duration::from_secs(interval_secs.max(1)),
                ..config
            };
            watch(book, config, events)?;
        }
    }
    Ok(())
}

/// Runs the periodic sync until Ctrl+C, rendering bus events as they arrive.
fn watch(book: QuoteBook, config: SyncConfig, events: &Receiver<QuoteEvent>) -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Signal(e.to_string()))?;
    }

    let interval = config.interval;
    let reconciler = Arc::new(reconciler(book, config)?);
    let handle = SyncScheduler::start(Arc::clone(&reconciler), interval);
    handle.trigger();
    info!("Client is running. Press Ctrl+C to exit.");

    while !shutdown.load(Ordering::Relaxed) {
        match events.recv_timeout(Duration::from_millis(500)) {
            Ok(event) => {
                if !printer::render_event(&event) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    handle.stop();
    info!("Watch loop stopping...");
    Ok(())
}

fn reconciler(book: QuoteBook, config: SyncConfig) -> Result<Reconciler> {
    let remote = HttpRemote::new(config)?;
    Reconciler::new(Arc::new(remote), Arc::new(Mutex::new(book)))
}

fn drain_events(events: &Receiver<QuoteEvent>) {
    while let Ok(event) = events.try_recv() {
        printer::render_event(&event);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
