mod clock;
mod rule;

pub use clock::{Clock, LocalClock};
pub use rule::RecurrenceRule;

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration as StdDuration,
};

use thiserror::Error as ThisError;
use time::{
    OffsetDateTime, error::IndeterminateOffset, format_description::BorrowedFormatItem, macros::format_description,
};
use tokio::{select, spawn, sync::Notify, task::JoinHandle, time::sleep};
use tracing::{debug, error, info};

const NEXT_FIRING_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

#[derive(Debug, ThisError)]
pub enum ScheduleError {
    #[error("interval must be a positive number of minutes")]
    InvalidInterval,

    #[error("cannot determine local offset: {0}")]
    ClockUnavailable(#[from] IndeterminateOffset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    Active,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Scheduler<C> {
    clock: Arc<C>,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Scheduler<C> {
        Scheduler { clock: Arc::new(clock) }
    }

    /// `rule` に一致するたびに `callback` を呼ぶ。
    ///
    /// 各回の呼び出しは独立したタスクで実行され、panic しても以降の発火は止まらない。
    /// ハンドルを drop してもスケジュールは止まらないので、停止には `cancel` を使う。
    pub fn register<F, Fut>(&self, rule: RecurrenceRule, callback: F) -> ScheduleHandle
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let shared = Arc::new(ScheduleShared {
            cancelled: AtomicBool::new(false),
            notify: Notify::new(),
        });
        let clock = self.clock.clone();

        info!("schedule registered: {rule}");
        let task = spawn(run_schedule(clock, rule, shared.clone(), callback));
        ScheduleHandle { shared, task }
    }
}

/// 登録済みスケジュールの操作。
#[derive(Debug)]
pub struct ScheduleHandle {
    shared: Arc<ScheduleShared>,
    task: JoinHandle<()>,
}

impl ScheduleHandle {
    /// 以降の発火を止める。何度呼んでもよい。
    pub fn cancel(&self) {
        if !self.shared.cancelled.swap(true, Ordering::SeqCst) {
            self.shared.notify.notify_one();
            info!("schedule cancelled");
        }
    }

    pub fn state(&self) -> ScheduleState {
        if self.shared.cancelled.load(Ordering::SeqCst) {
            ScheduleState::Cancelled
        } else {
            ScheduleState::Active
        }
    }

    /// タイマータスクの終了を待つ。`cancel` の後に呼ぶこと。
    pub async fn join(self) {
        if let Err(err) = self.task.await {
            error!("schedule task failed: {err}");
        }
    }
}

#[derive(Debug)]
struct ScheduleShared {
    cancelled: AtomicBool,
    notify: Notify,
}

impl ScheduleShared {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

async fn run_schedule<C, F, Fut>(clock: Arc<C>, rule: RecurrenceRule, shared: Arc<ScheduleShared>, callback: F)
where
    C: Clock,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let mut next = rule.next_after(clock.now());
    log_next_firing(next);

    while !shared.is_cancelled() {
        // タイマーは単調時計なので、壁時計が追い付くまで待ち直す
        let now = clock.now();
        if now < next {
            let wait: StdDuration = (next - now).try_into().unwrap_or_default();
            select! {
                _ = sleep(wait) => {}
                _ = shared.notify.notified() => {}
            }
            continue;
        }

        // 各回は独立させ、終了を待たずに次の発火時刻へ進む
        let tick = spawn(callback());
        spawn(async move {
            if let Err(err) = tick.await {
                error!("scheduled callback failed: {err}");
            }
        });

        next = rule.next_after(now);
        log_next_firing(next);
    }
    debug!("schedule task finished");
}

fn log_next_firing(next: OffsetDateTime) {
    match next.format(NEXT_FIRING_FORMAT) {
        Ok(formatted) => debug!("next firing at {formatted}"),
        Err(err) => debug!("next firing at {next} ({err})"),
    }
}
