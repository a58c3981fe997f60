use crate::{error::NotifierError, model::notification::NotificationRequest};

use std::sync::Arc;

use futures::future::BoxFuture;

pub type ArcNotifier = Arc<dyn Notifier>;

/// 通知を表示するプラットフォーム機構。
pub trait Notifier: Send + Sync + 'static {
    /// ログ用の説明文。
    fn description(&self) -> String;

    fn notify(&self, request: NotificationRequest) -> BoxFuture<'_, Result<(), NotifierError>>;
}
