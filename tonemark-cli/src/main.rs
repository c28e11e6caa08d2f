use clap::Parser;
use std::process::ExitCode;
use tonemark_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}: {error:#}", cli.error_prefix());
            ExitCode::FAILURE
        }
    }
}
