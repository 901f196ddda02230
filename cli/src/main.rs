use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use stoat_relay_info::{FetchOptions, RelayInfoClient, RelayMetadata};

/// Fetch and print a relay's metadata document.
#[derive(Parser)]
#[command(name = "stoat", version, about = "Fetch and print relay metadata")]
struct Cli {
    /// Relay address, e.g. wss://relay.example.com
    relay: String,

    /// Print the decoded document as JSON instead of a field listing.
    #[arg(long)]
    json: bool,

    /// Per-request timeout in seconds (transport default when omitted).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Fail on non-2xx responses instead of decoding their body.
    #[arg(long)]
    strict_status: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Cli::parse();
    let options = FetchOptions {
        timeout: args.timeout_secs.map(Duration::from_secs),
        reject_error_status: args.strict_status,
    };

    let client = RelayInfoClient::with_options(options);
    let metadata = client
        .fetch_metadata(&args.relay)
        .await
        .with_context(|| format!("fetch metadata for {}", args.relay))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        print_fields(&args.relay, &metadata);
    }

    Ok(())
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("No data available")
}

fn print_fields(relay: &str, metadata: &RelayMetadata) {
    if let Some(name) = metadata.name.as_deref() {
        println!("name:        {name}");
    }
    if let Some(pubkey) = metadata.pubkey.as_deref() {
        println!("admin:       {pubkey}");
    }
    println!("relay:       {relay}");
    println!("description: {}", field(metadata.description.as_deref()));
    println!("contact:     {}", field(metadata.contact.as_deref()));
    println!("software:    {}", field(metadata.software.as_deref()));
    println!("version:     {}", field(metadata.version.as_deref()));
    if let Some(icon) = metadata.icon.as_deref() {
        println!("icon:        {icon}");
    }
    if let Some(nips) = metadata.supported_nips.as_deref() {
        if !nips.is_empty() {
            println!("nips:        {}", stoat_nips::display(nips));
        }
    }
}
