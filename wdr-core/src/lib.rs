pub mod error;
pub mod interface;
pub mod model;

use std::time::Duration;

/// 通知に付与するアプリケーション識別子。
pub const APP_ID: &str = "Water Drinker Reminder";

/// 通知のタイトル。
pub const NOTIFICATION_TITLE: &str = "Health Reminder";

/// 通知が表示され続ける時間。
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(60);

/// 設定ファイルの既定のファイル名。
pub const CONFIG_FILENAME: &str = "config.json";
