use std::sync::Arc;

use rand::{rng, seq::IndexedRandom};
use tracing::{error, info, warn};
use wdr_core::{
    interface::notifier::{ArcNotifier, Notifier},
    model::{config::ReminderConfig, notification::NotificationRequest},
};

/// メッセージを選んで通知を依頼する。
#[derive(Clone)]
pub struct ReminderDispatcher {
    notifier: ArcNotifier,
}

impl ReminderDispatcher {
    pub fn new(notifier: impl Notifier) -> ReminderDispatcher {
        info!("using notifier: {}", notifier.description());
        ReminderDispatcher {
            notifier: Arc::new(notifier),
        }
    }

    /// リマインダーを 1 回送る。選ばれたメッセージを返す。
    ///
    /// `show_notification` が無効ならメッセージを選ぶだけで通知はしない。
    /// 通知機構の失敗はログに残すだけで呼び出し元には返さない。
    pub async fn send(&self, config: &ReminderConfig) -> Option<String> {
        let chosen = {
            let mut rng = rng();
            config.reminder_messages.choose(&mut rng).cloned()
        };
        let Some(message) = chosen else {
            warn!("no reminder message configured");
            return None;
        };

        if config.show_notification {
            let request = NotificationRequest::from_config(config, message.clone());
            if let Err(err) = self.notifier.notify(request).await {
                error!("failed to send notification: {err}");
                return Some(message);
            }
        }

        info!("reminder sent: {message}");
        Some(message)
    }
}
