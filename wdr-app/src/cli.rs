use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(author, version, about)]
pub struct Arguments {
    /// Specify path for config file. Defaults to config.json next to the executable.
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}
