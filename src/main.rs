//! Address Book - Main entry point
//!
//! Runs an interactive address book session on stdin/stdout. Logs go to
//! stderr so they never mix with the prompts.

use address_book::{demo, AddressBook, Config, Session};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut book = if config.seed_demo {
        info!("Loading demonstration records");
        demo::demo_book()?
    } else {
        AddressBook::new()
    };

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(&mut book, stdin.lock(), stdout.lock());

        if let Err(e) = session.run() {
            error!("Session ended with an error: {}", e);
            return Err(e.into());
        }
    }

    info!(records = book.len(), "Address book session finished");
    Ok(())
}
