mod app;
mod cli;
mod config;
mod render;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = app::run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
