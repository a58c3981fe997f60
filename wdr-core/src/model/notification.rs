use crate::{APP_ID, NOTIFICATION_TIMEOUT, NOTIFICATION_TITLE, model::config::ReminderConfig};

use std::time::Duration;

/// 通知に付けるサウンドの指定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationSound {
    /// 鳴らさない。
    Silent,

    /// システム既定のサウンド。
    Default,

    /// 指定されたサウンドファイル。
    File(String),
}

impl NotificationSound {
    pub fn from_config(config: &ReminderConfig) -> NotificationSound {
        match (config.play_sound, &config.sound_file) {
            (false, _) => NotificationSound::Silent,
            (true, Some(path)) if !path.is_empty() => NotificationSound::File(path.clone()),
            (true, _) => NotificationSound::Default,
        }
    }
}

/// プラットフォームの通知機構に渡すリクエスト。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub sound: NotificationSound,
    pub app_id: String,
    pub timeout: Duration,
}

impl NotificationRequest {
    pub fn from_config(config: &ReminderConfig, message: impl Into<String>) -> NotificationRequest {
        NotificationRequest {
            title: NOTIFICATION_TITLE.to_string(),
            body: message.into(),
            sound: NotificationSound::from_config(config),
            app_id: APP_ID.to_string(),
            timeout: NOTIFICATION_TIMEOUT,
        }
    }
}
