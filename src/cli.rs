use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(version, about="Check that a git working copy has the expected branch checked out", long_about = None)]
pub struct Cli {
    /// Directory path to git working copy
    #[clap(short = 'd', long)]
    pub directory: PathBuf,

    /// Branch to expect working copy checkout to be
    #[clap(short = 'b', long)]
    pub branch: String,
}
