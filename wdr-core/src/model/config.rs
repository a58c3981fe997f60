use crate::error::InvalidConfig;

use serde::{Deserialize, Serialize};

const DEFAULT_REMINDER_INTERVAL: u32 = 15;

const DEFAULT_REMINDER_MESSAGES: &[&str] = &[
    "Time to get up and move around! Grab some water while you're at it~",
    "Take a break, drink some water, stay healthy!",
    "Water time! Remember to stand up and stretch your neck and shoulders.",
    "Work matters, but health matters more! Have a glass of water~",
    "Your 15-minute reminder is here: get up, move a little, drink some water!",
];

/// config.json
///
/// ファイルに存在しないキーは既定値のまま残り、存在するキーは値ごと置き換わる。
/// 未知のキーは無視される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// 通知の間隔(分)。
    pub reminder_interval: u32,
    pub show_notification: bool,
    pub play_sound: bool,

    /// 独自のサウンドファイル。`None` ならシステム既定のサウンドを使う。
    pub sound_file: Option<String>,
    pub reminder_messages: Vec<String>,
}

impl Default for ReminderConfig {
    fn default() -> ReminderConfig {
        ReminderConfig {
            reminder_interval: DEFAULT_REMINDER_INTERVAL,
            show_notification: true,
            play_sound: true,
            sound_file: None,
            reminder_messages: DEFAULT_REMINDER_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ReminderConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.reminder_interval == 0 {
            return Err(InvalidConfig::ZeroInterval);
        }
        if self.reminder_messages.is_empty() {
            return Err(InvalidConfig::NoMessages);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_valid() {
        let config = ReminderConfig::default();
        assert_eq!(config.reminder_interval, 15);
        assert!(config.show_notification);
        assert!(config.play_sound);
        assert_eq!(config.sound_file, None);
        assert_eq!(config.reminder_messages.len(), 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn missing_keys_take_defaults_and_present_keys_replace() {
        let config: ReminderConfig = serde_json::from_str(
            r#"{ "reminder_interval": 30, "reminder_messages": ["only one"], "unknown_key": 42 }"#,
        )
        .expect("should parse");

        assert_eq!(config.reminder_interval, 30);
        assert_eq!(config.reminder_messages, vec!["only one".to_string()]);
        assert!(config.show_notification);
        assert!(config.play_sound);
    }

    #[test]
    fn validation_rejects_broken_invariants() {
        let zero = ReminderConfig {
            reminder_interval: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(InvalidConfig::ZeroInterval));

        let empty = ReminderConfig {
            reminder_messages: vec![],
            ..Default::default()
        };
        assert_eq!(empty.validate(), Err(InvalidConfig::NoMessages));
    }

    #[test]
    fn sound_file_is_written_as_null_when_absent() {
        let value = serde_json::to_value(ReminderConfig::default()).expect("should serialize");
        assert_eq!(value["sound_file"], serde_json::Value::Null);
    }
}
