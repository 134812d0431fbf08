use clap::Parser;
use keypilot::commands::{self, Cli};
use keypilot::init_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_app(cli.verbose);
    commands::run(cli).await
}
