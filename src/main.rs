mod cli;
mod config;
mod convert;
mod decide_cmd;
mod logging;
mod neighbors_cmd;
mod summarize_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Neighbors(args) => neighbors_cmd::run(args),
        Command::Decide(args) => decide_cmd::run(args),
        Command::Summarize(args) => summarize_cmd::run(args),
    }
}
