mod cli;
mod context;
mod dispatcher;
mod notifier;
mod session;

use crate::{
    context::ReminderContext,
    dispatcher::ReminderDispatcher,
    notifier::DesktopNotifier,
    session::{InteractiveSession, MenuChoice},
};

use anyhow::Result;
use clap::Parser;
use tokio::{
    io::{BufReader, stdin, stdout},
    runtime::Builder,
    signal::ctrl_c,
};
use tracing::{debug, info};
use wdr_common::config::ConfigStore;
use wdr_scheduler::{LocalClock, Scheduler};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli::Arguments::parse();

    // ローカルオフセットはランタイムがスレッドを作る前に確定させる
    let clock = LocalClock::detect();

    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(args, clock))
}

async fn run(args: cli::Arguments, clock: LocalClock) -> Result<()> {
    let store = match args.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::beside_executable()?,
    };
    info!("using config file: {}", store.path().display());

    let mut session = InteractiveSession::new(BufReader::new(stdin()), stdout());
    let config = match session.menu().await? {
        MenuChoice::Exit => {
            session.say("Thanks for using Water Drinker Reminder!").await?;
            return Ok(());
        }
        MenuChoice::Configure => session.configure(&store).await?,
        MenuChoice::Start => store.load(),
    };
    session.show_summary(&config).await?;

    let context = ReminderContext::new(config, ReminderDispatcher::new(DesktopNotifier::new()));
    info!("reminding every {} minutes", context.config().reminder_interval);
    let scheduler = Scheduler::new(clock);
    let running = context.start(&scheduler).await?;
    debug!("schedule state: {:?}", running.state());

    running.run_until(ctrl_c()).await?;
    session.say("\nReminders stopped. Stay healthy!").await?;

    Ok(())
}
