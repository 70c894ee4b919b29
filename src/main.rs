mod api;
mod cli;
mod config;
mod player;
mod routes;
mod services;
mod sort;
mod state;

use clap::Parser;

use crate::cli::{Cli, CliError, Command};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // stdout belongs to the terminal player.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Command::Serve(args) => cli::run_serve(config, args).await,
        Command::Play(args) => cli::run_play(&config, args).await,
    }
}
