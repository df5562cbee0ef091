//! Punchline - a joke feed for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use punchline_core::Result;

/// Punchline - pull-to-refresh jokes in your terminal
#[derive(Parser, Debug)]
#[command(name = "punchline")]
#[command(about = "A joke feed with an animated pull-to-refresh landscape", long_about = None)]
struct Args {
    /// Serve bundled jokes instead of calling the endpoint
    #[arg(long)]
    offline: bool,

    /// Joke endpoint to query; expects a JSON object with a "joke" field
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    punchline::run(punchline::RunOptions {
        offline: args.offline,
        url: args.url,
    })
    .await
}
