use anyhow::Result;
use grammar_tutor::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
