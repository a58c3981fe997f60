use futures::{FutureExt, future::BoxFuture};
use notify_rust::{Notification, Timeout};
use tokio::task::spawn_blocking;
use wdr_core::{
    error::NotifierError,
    interface::notifier::Notifier,
    model::notification::{NotificationRequest, NotificationSound},
};

#[cfg(all(unix, not(target_os = "macos")))]
const DEFAULT_SOUND_NAME: &str = "message-new-instant";

#[cfg(not(all(unix, not(target_os = "macos"))))]
const DEFAULT_SOUND_NAME: &str = "Default";

/// notify-rust によるデスクトップ通知。
#[derive(Debug, Clone, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> DesktopNotifier {
        DesktopNotifier
    }
}

impl Notifier for DesktopNotifier {
    fn description(&self) -> String {
        "notify-rust desktop notification".to_string()
    }

    fn notify(&self, request: NotificationRequest) -> BoxFuture<'_, Result<(), NotifierError>> {
        // D-Bus や OS の API 呼び出しはブロックする
        async move { spawn_blocking(move || show(&request)).await.map_err(NotifierError::by_backend)? }.boxed()
    }
}

fn show(request: &NotificationRequest) -> Result<(), NotifierError> {
    let timeout_millis = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);

    let mut notification = Notification::new();
    notification
        .appname(&request.app_id)
        .summary(&request.title)
        .body(&request.body)
        .timeout(Timeout::Milliseconds(timeout_millis));

    match &request.sound {
        NotificationSound::Silent => (),
        NotificationSound::Default => {
            notification.sound_name(DEFAULT_SOUND_NAME);
        }
        NotificationSound::File(path) => attach_sound_file(&mut notification, path),
    }

    notification
        .show()
        .map_err(|err| NotifierError::by_backend(err.to_string()))?;
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn attach_sound_file(notification: &mut Notification, path: &str) {
    use notify_rust::Hint;

    notification.hint(Hint::SoundFile(path.to_string()));
}

/// XDG 以外ではファイルパスをサウンド名として渡す。
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn attach_sound_file(notification: &mut Notification, path: &str) {
    notification.sound_name(path);
}
