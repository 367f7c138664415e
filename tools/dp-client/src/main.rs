//! DP-Client: command-line client for the data server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use dp_client::DataServerClient;

/// Command-line client for a running data server.
#[derive(Parser, Debug)]
#[command(name = "dp-client")]
#[command(about = "Push, query and reclassify data blocks on a data server")]
struct Args {
    /// Base URL of the data server
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Push one data block (the Content-MD5 digest is computed locally)
    Push {
        /// Block name
        name: String,
        /// Block type (BLOCKTYPEA or BLOCKTYPEB)
        block_type: String,
        /// Block body as a UTF-8 string
        body: String,
    },
    /// List every block of a given type
    Query {
        /// Block type (BLOCKTYPEA or BLOCKTYPEB)
        block_type: String,
    },
    /// Reclassify the named block to a new type
    Reclassify {
        /// Block name
        name: String,
        /// New block type (BLOCKTYPEA or BLOCKTYPEB)
        new_block_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let client = DataServerClient::new(&args.endpoint)?;

    match args.command {
        Command::Push {
            name,
            block_type,
            body,
        } => {
            let accepted = client.push_data(&name, &block_type, &body).await?;
            println!("{}", accepted);
        }
        Command::Query { block_type } => {
            let envelopes = client.get_data(&block_type).await?;
            println!("{}", serde_json::to_string_pretty(&envelopes)?);
        }
        Command::Reclassify {
            name,
            new_block_type,
        } => {
            let updated = client.update_data(&name, &new_block_type).await?;
            println!("{}", updated);
        }
    }

    Ok(())
}
