use check::CheckError;
use clap::error::ErrorKind;
use clap::Parser;
use git::GitWorkingCopy;
use status::{report, Status};
use std::process::exit;

mod check;
mod cli;
mod git;
mod status;

fn main() {
    // a bug anywhere below must still come out as a formatted UNKNOWN line
    std::panic::set_hook(Box::new(|info| {
        println!("{}: unexpected error: {info}", Status::Unknown);
        exit(Status::Unknown.exit_code());
    }));

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            exit(Status::Unknown.exit_code());
        }
    };

    match check::run(&GitWorkingCopy, &cli.directory, &cli.branch) {
        Ok(outcome) => report(outcome.status, &outcome.message),
        Err(CheckError::Usage(message)) => report(Status::Unknown, &message),
        Err(CheckError::Runtime(err)) => report(Status::Unknown, &format!("{err:#}")),
    }
}
