mod task;
mod util;

use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
struct Arguments {
    #[clap(subcommand)]
    task: ArgumentsTask,
}

#[derive(Debug, Parser)]
enum ArgumentsTask {
    /// Writes the default config to data/config.json unless it already exists.
    InitConfig,

    /// Builds the release binary and packages it with a default config into dist/.
    Dist,

    #[clap(aliases = &["dev"])]
    Development,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    match args.task {
        ArgumentsTask::InitConfig => task::init_config()?,
        ArgumentsTask::Dist => task::dist()?,
        ArgumentsTask::Development => task::development()?,
    }
    Ok(())
}
