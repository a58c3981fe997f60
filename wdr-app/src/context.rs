use crate::dispatcher::ReminderDispatcher;

use std::{future::Future, io::Result as IoResult, sync::Arc};

use tracing::{error, info};
use wdr_core::model::config::ReminderConfig;
use wdr_scheduler::{Clock, RecurrenceRule, ScheduleError, ScheduleHandle, ScheduleState, Scheduler};

/// 設定と送信機構を束ねた開始前の状態。
pub struct ReminderContext {
    config: ReminderConfig,
    dispatcher: ReminderDispatcher,
}

impl ReminderContext {
    pub fn new(config: ReminderConfig, dispatcher: ReminderDispatcher) -> ReminderContext {
        ReminderContext { config, dispatcher }
    }

    pub fn config(&self) -> &ReminderConfig {
        &self.config
    }

    /// 即座に 1 回送ってから定期送信を登録する。
    pub async fn start<C: Clock>(self, scheduler: &Scheduler<C>) -> Result<RunningReminder, ScheduleError> {
        let rule = RecurrenceRule::every_minutes(self.config.reminder_interval)?;

        self.dispatcher.send(&self.config).await;

        let config = Arc::new(self.config);
        let dispatcher = self.dispatcher;
        let handle = scheduler.register(rule, move || {
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            async move {
                dispatcher.send(&config).await;
            }
        });

        Ok(RunningReminder { handle })
    }
}

/// 定期送信中の状態。
pub struct RunningReminder {
    handle: ScheduleHandle,
}

impl RunningReminder {
    pub fn state(&self) -> ScheduleState {
        self.handle.state()
    }

    /// `signal` が完了するまで送信を続けてから止める。`signal` の失敗はそのまま返す。
    pub async fn run_until<S>(self, signal: S) -> IoResult<()>
    where
        S: Future<Output = IoResult<()>>,
    {
        let result = signal.await;
        if let Err(err) = &result {
            error!("failed to wait for interrupt signal: {err}");
        }
        self.stop().await;
        result
    }

    pub async fn stop(self) {
        self.handle.cancel();
        self.handle.join().await;
        info!("reminders stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        future::ready,
        io::Error as IoError,
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use futures::{FutureExt, future::BoxFuture};
    use time::{OffsetDateTime, macros::datetime};
    use tokio::time::sleep;
    use wdr_core::{error::NotifierError, interface::notifier::Notifier, model::notification::NotificationRequest};

    #[derive(Clone, Default)]
    struct CountingNotifier(Arc<AtomicUsize>);

    impl Notifier for CountingNotifier {
        fn description(&self) -> String {
            "counting".to_string()
        }

        fn notify(&self, _request: NotificationRequest) -> BoxFuture<'_, Result<(), NotifierError>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            async { Ok(()) }.boxed()
        }
    }

    /// 実時間と無関係に、指定した時刻から動かない時計。
    struct FrozenClock(OffsetDateTime);

    impl Clock for FrozenClock {
        fn now(&self) -> OffsetDateTime {
            self.0
        }
    }

    #[tokio::test]
    async fn start_sends_once_immediately_then_stops_cleanly() {
        let notifier = CountingNotifier::default();
        let context = ReminderContext::new(ReminderConfig::default(), ReminderDispatcher::new(notifier.clone()));
        let scheduler = Scheduler::new(FrozenClock(datetime!(2025-03-01 10:07:30 UTC)));

        let running = context.start(&scheduler).await.expect("valid interval");
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
        assert_eq!(running.state(), ScheduleState::Active);

        sleep(Duration::from_millis(10)).await;
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);

        running.stop().await;
    }

    #[tokio::test]
    async fn zero_interval_is_rejected_before_sending() {
        let notifier = CountingNotifier::default();
        let config = ReminderConfig {
            reminder_interval: 0,
            ..Default::default()
        };
        let context = ReminderContext::new(config, ReminderDispatcher::new(notifier.clone()));
        let scheduler = Scheduler::new(FrozenClock(OffsetDateTime::UNIX_EPOCH));

        assert!(context.start(&scheduler).await.is_err());
        assert_eq!(notifier.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn run_until_stops_after_signal() {
        let notifier = CountingNotifier::default();
        let context = ReminderContext::new(ReminderConfig::default(), ReminderDispatcher::new(notifier.clone()));
        let scheduler = Scheduler::new(FrozenClock(datetime!(2025-03-01 10:07:30 UTC)));

        let running = context.start(&scheduler).await.expect("valid interval");
        running.run_until(ready(Ok(()))).await.expect("signal received");
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn run_until_reports_signal_failure() {
        let notifier = CountingNotifier::default();
        let context = ReminderContext::new(ReminderConfig::default(), ReminderDispatcher::new(notifier.clone()));
        let scheduler = Scheduler::new(FrozenClock(datetime!(2025-03-01 10:07:30 UTC)));

        let running = context.start(&scheduler).await.expect("valid interval");
        let result = running.run_until(ready(Err(IoError::other("no signal handler")))).await;
        assert!(result.is_err());
    }
}
