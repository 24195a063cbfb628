use anyhow::Result;
use clap::Parser;

use protoc_fetch::cli::Cli;
use protoc_fetch::command_handlers::dispatch;

fn main() -> Result<()> {
    let cli = Cli::parse();
    dispatch::dispatch(cli)
}
