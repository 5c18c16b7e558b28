//! dictcache - look up English words from the terminal
//!
//! Reads words from stdin, prints their definitions, and keeps every fetched
//! entry in a local buffer directory so repeated lookups skip the network.

use std::io;

use clap::Parser;
use tracing::{info, warn};

use dictcache::cache::Buffer;
use dictcache::cli::{Cli, Config};
use dictcache::data::DictionaryClient;
use dictcache::logging::init_tracing;
use dictcache::repl::Repl;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    init_tracing(&config.log_level);

    // An unusable cache directory degrades to uncached lookups
    let buffer = match &config.buffer_dir {
        Some(dir) => match Buffer::open(dir) {
            Ok(buffer) => {
                info!(entries = buffer.len(), "buffer ready");
                Some(buffer)
            }
            Err(e) => {
                warn!(error = %e, "continuing without a buffer");
                None
            }
        },
        None => None,
    };

    let client = DictionaryClient::with_options(config.api_url.clone(), config.timeout)?;
    let mut repl = Repl::new(client, buffer, config.raw_output);

    let stdin = io::stdin();
    repl.run(stdin.lock(), io::stdout().lock()).await?;

    Ok(())
}
