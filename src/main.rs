use anyhow::Result;
use clap::Parser;
use recanon::{Config, HttpLegacyProvider, normalize_next_record};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Fetch the next available legacy record and print its canonical form.
#[derive(Debug, Parser)]
#[command(name = "recanon", version, about)]
struct Cli {
    /// Override the legacy upstream endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Override the bearer credential (otherwise read from the environment).
    #[arg(long)]
    auth_token: Option<String>,

    /// Pretty-print the canonical record.
    #[arg(long)]
    pretty: bool,

    /// Log at debug level, including the raw legacy payload.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = Config::from_env();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(auth_token) = cli.auth_token {
        config.auth_token = Some(auth_token);
    }

    let provider = HttpLegacyProvider::new(config.auth_token.as_deref(), &config.endpoint);
    let record = normalize_next_record(&provider).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{json}");

    Ok(())
}
