//! Chainline CLI - Command-line interface for address-lifecycle event streams.

use clap::{Parser, Subcommand};

mod commands;
mod output;
mod path;

use commands::{append, list, mint, status, verify};

#[derive(Parser)]
#[command(name = "chainline")]
#[command(about = "Address-lifecycle event stream operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint record identifiers
    Mint {
        /// Number of identifiers to mint
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Mint random identifiers instead of time-ordered ones
        #[arg(long)]
        random: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a lifecycle record and append it to a stream
    Append {
        /// Path to stream file (default: derived from the environment)
        stream: Option<String>,
        /// Address the record is about (BTC or ETH literal)
        #[arg(long)]
        address: String,
        /// Lifecycle event type (address_created or address_verified)
        #[arg(long = "type")]
        event_type: String,
        /// Event payload as JSON (default: {})
        #[arg(long)]
        data: Option<String>,
        /// fsync after the append
        #[arg(long)]
        sync: bool,
    },
    /// List records in a stream
    List {
        /// Path to stream file (default: derived from the environment)
        stream: Option<String>,
        /// Only records about this address
        #[arg(long)]
        address: Option<String>,
        /// Only records of this event type
        #[arg(long = "type")]
        event_type: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Stop after reading N records (default: unlimited)
        #[arg(long)]
        max_events: Option<u64>,
        /// Reject streams larger than SIZE bytes (default: unlimited)
        #[arg(long)]
        max_size: Option<u64>,
    },
    /// Project the current verification status of an address
    Status {
        /// Address to project (BTC or ETH literal)
        address: String,
        /// Path to stream file (default: derived from the environment)
        stream: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify all records in a stream against the record contract
    Verify {
        /// Path to stream file (default: derived from the environment)
        stream: Option<String>,
        /// Exit with error code if any verification fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mint {
            count,
            random,
            json,
        } => mint::run(count, random, json),
        Commands::Append {
            stream,
            address,
            event_type,
            data,
            sync,
        } => append::run(stream, address, event_type, data, sync),
        Commands::List {
            stream,
            address,
            event_type,
            json,
            max_events,
            max_size,
        } => list::run(stream, address, event_type, json, max_events, max_size),
        Commands::Status {
            address,
            stream,
            json,
        } => status::run(address, stream, json),
        Commands::Verify {
            stream,
            strict,
            json,
        } => verify::run(stream, strict, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
