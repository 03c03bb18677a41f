use clap::Parser;
use mediasort::{Result, cli::Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli).await
}
