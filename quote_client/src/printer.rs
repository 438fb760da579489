//! Terminal presentation of quotes and bus events.
//!
//! Everything the user sees goes through here: the rest of the client only
//! mutates the `QuoteBook` and lets the printer react to `QuoteEvent`s.
use crate::args::OutputFormat;
use log::{info, warn};
use quote_core::{NoticeLevel, QuoteEvent, QuoteRecord, Result};

/// Print one quote in the requested format.
pub fn print_quote(record: &QuoteRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("\"{}\"", record.text);
            println!("    Category: {}", record.category);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(record)?),
    }
    Ok(())
}

/// Print a list of quotes in the requested format.
pub fn print_quotes(records: &[QuoteRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                let id = record.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
                println!("[{}] {} ({})", id, record.text, record.category);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}

/// React to one bus event. Returns `false` once the stream is over.
pub fn render_event(event: &QuoteEvent) -> bool {
    match event {
        QuoteEvent::CollectionChanged { len } => {
            info!("Quote collection now holds {} quotes", len);
            true
        }
        QuoteEvent::Notice(notice) => {
            let stamp = notice.at.format("%H:%M:%S");
            match notice.level {
                NoticeLevel::Info => println!("[{}] {}", stamp, notice.message),
                NoticeLevel::Warning | NoticeLevel::Error => {
                    warn!("{}", notice.message);
                    eprintln!("[{}] {}: {}", stamp, notice.level, notice.message);
                }
            }
            true
        }
        QuoteEvent::Shutdown => false,
    }
}
