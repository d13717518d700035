mod cli;
mod config;
mod game;
mod infrastructure;
mod release;
mod session;
mod ui;

use clap::Parser;
use std::process;

use cli::Cli;

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
