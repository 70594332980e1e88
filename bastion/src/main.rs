use bastion_core::cli::conf::{ConfigCmd, check, dump};
use bastion_core::logging::init_logging;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bastion",
    version,
    about = "Bastion: listener configuration loader and checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    match cli.command {
        Command::Config { cmd } => match cmd {
            ConfigCmd::Check { path, plain } => check(path, plain),
            ConfigCmd::Dump {
                path,
                json,
                yaml,
                repr,
            } => dump(path, json, yaml, repr),
        },
    }
}
