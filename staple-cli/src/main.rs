use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn main() -> Result<()> {
    let matches = Command::new("staple")
        .about("Staple markdown files together into a single Word document")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::convert::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("convert", args)) => cmd::convert::execute(args),
        _ => unreachable!("subcommand is required"),
    }
}
