use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod serve;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Set the server port
        #[arg(long, default_value = DEFAULT_PORT)]
        port: String,
    },
    /// Ask the grammar tutor a single question
    Ask {
        #[arg(long)]
        question: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Pick up GEMINI_API_KEY and friends from a local .env file
    dotenv::dotenv().ok();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Ask { question }) => {
            ask::run(question).await?;
        }
        None => {
            serve::run(DEFAULT_HOST.to_string(), DEFAULT_PORT.to_string()).await?;
        }
    }

    Ok(())
}
