use clap::Parser;
use microservice_pool::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::List => cli::list::run(&cli),
        Command::Show(args) => cli::show::run(&cli, args),
        Command::Check => cli::check::run(&cli),
    }
}
