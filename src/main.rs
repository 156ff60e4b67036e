mod banner_cmd;
mod cli;
mod config;
mod convert;
mod document;
mod layout_cmd;
mod logging;
mod pipeline;
mod refresh;
mod watch_cmd;

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
        Command::Layout(args) => layout_cmd::run(args),
        Command::Banner(args) => banner_cmd::run(args),
        Command::Watch(args) => watch_cmd::run(args),
    }
}
