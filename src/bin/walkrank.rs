use clap::Parser;
use colored::Colorize;
use walkrank_core::cli::{self, Cli};
use walkrank_core::exit::RankExit;

fn main() -> RankExit {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            RankExit::for_error(&e)
        }
    }
}
