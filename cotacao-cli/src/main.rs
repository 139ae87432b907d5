//! Cotacao CLI
//!
//! Asks the local rate service for the current bid, prints it and saves it
//! to `cotacao.txt`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cotacao_client::{DEFAULT_URL, RateClient, render_rate, write_rate_file};

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "Fetch the current USD-BRL bid", long_about = None)]
struct Cli {
    /// URL of the rate service's /cotacao endpoint
    #[arg(long, env = "COTACAO_URL", default_value = DEFAULT_URL)]
    url: String,

    /// File that receives the rendered rate (created or truncated)
    #[arg(long, env = "COTACAO_OUTPUT", default_value = "cotacao.txt")]
    output: PathBuf,

    /// Request budget in milliseconds
    #[arg(long, env = "COTACAO_TIMEOUT_MS", default_value_t = 300)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = RateClient::new(&cli.url).with_timeout(Duration::from_millis(cli.timeout_ms));

    let rate = match client.fetch_rate().await {
        Ok(rate) => rate,
        // Missing the request deadline is unrecoverable.
        Err(e) if e.is_fatal() => panic!("{}", e),
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let rendered = render_rate(&rate);
    println!("{}", rendered);

    if let Err(e) = write_rate_file(&cli.output, &rate).await {
        println!("{}", e);
    }

    Ok(())
}
