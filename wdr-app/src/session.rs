use std::{fmt::Display, io::Result as IoResult};

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use wdr_common::config::ConfigStore;
use wdr_core::model::config::ReminderConfig;

/// 起動メニューの選択肢。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Configure,
    Exit,
}

impl MenuChoice {
    /// 空欄や未知の入力は `Start` として扱う。
    pub fn parse(input: &str) -> MenuChoice {
        match input.trim() {
            "0" => MenuChoice::Exit,
            "2" => MenuChoice::Configure,
            _ => MenuChoice::Start,
        }
    }
}

/// 間隔の入力を解釈した結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalInput {
    Keep,
    Set(u32),
    Invalid,
}

impl IntervalInput {
    pub fn parse(input: &str) -> IntervalInput {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return IntervalInput::Keep;
        }
        match trimmed.parse::<u32>() {
            Ok(minutes) if minutes > 0 => IntervalInput::Set(minutes),
            _ => IntervalInput::Invalid,
        }
    }
}

/// 対話的な設定の流れ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigureStep {
    AskInterval,
    AskSave,
    Done,
}

/// 端末との対話。設定の入口でしかなく、状態は呼び出し元に返す。
pub struct InteractiveSession<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> InteractiveSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> InteractiveSession<R, W> {
        InteractiveSession { reader, writer }
    }

    /// メニューを表示して選択を受け取る。
    pub async fn menu(&mut self) -> IoResult<MenuChoice> {
        self.say("==== Water Drinker Reminder ====".bold()).await?;
        self.say("1. Start reminders").await?;
        self.say("2. Configure reminders").await?;
        self.say("0. Exit").await?;

        let input = self.ask("Select an option (default 1): ").await?;
        let choice = MenuChoice::parse(&input);
        debug!("menu choice: {choice:?}");
        Ok(choice)
    }

    /// 間隔の変更と保存の確認を行い、結果の設定を返す。保存の有無に関わらず返す。
    pub async fn configure(&mut self, store: &ConfigStore) -> IoResult<ReminderConfig> {
        let mut config = store.load();

        self.say(format!("\n{}", "==== Configure reminders ====".bold())).await?;
        self.say(format!("Current reminder interval: {} minutes", config.reminder_interval))
            .await?;

        let mut step = ConfigureStep::AskInterval;
        while step != ConfigureStep::Done {
            step = match step {
                ConfigureStep::AskInterval => {
                    let input = self
                        .ask("Enter a new reminder interval in minutes (blank keeps current): ")
                        .await?;
                    match IntervalInput::parse(&input) {
                        IntervalInput::Keep => (),
                        IntervalInput::Set(minutes) => {
                            config.reminder_interval = minutes;
                            self.say(format!("Reminder interval set to {minutes} minutes").green())
                                .await?;
                        }
                        IntervalInput::Invalid => {
                            self.say("Invalid interval, keeping current setting".yellow()).await?;
                        }
                    }
                    ConfigureStep::AskSave
                }
                ConfigureStep::AskSave => {
                    let input = self.ask("\nSave configuration? (y/n): ").await?;
                    if input.trim().eq_ignore_ascii_case("y") {
                        store.save(&config);
                        self.say("Configuration saved").await?;
                    }
                    ConfigureStep::Done
                }
                ConfigureStep::Done => ConfigureStep::Done,
            };
        }

        Ok(config)
    }

    /// 開始時の設定概要。
    pub async fn show_summary(&mut self, config: &ReminderConfig) -> IoResult<()> {
        self.say(format!("\nReminder interval: {} minutes", config.reminder_interval))
            .await?;
        self.say(format!("Notifications: {}", on_off(config.show_notification)))
            .await?;
        self.say(format!("Sound: {}", on_off(config.play_sound))).await?;
        self.say("Press Ctrl+C to exit\n".dimmed()).await?;
        self.say("Sending the first reminder...").await?;
        Ok(())
    }

    pub async fn say(&mut self, line: impl Display) -> IoResult<()> {
        self.writer.write_all(format!("{line}\n").as_bytes()).await?;
        self.writer.flush().await
    }

    /// 質問を表示して 1 行読む。入力が閉じていれば空文字列を返す。
    async fn ask(&mut self, question: &str) -> IoResult<String> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        self.reader.read_line(&mut line).await?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::{read_to_string, write};

    use tempfile::TempDir;
    use wdr_core::CONFIG_FILENAME;

    fn session(input: &str) -> InteractiveSession<&[u8], Vec<u8>> {
        InteractiveSession::new(input.as_bytes(), Vec::new())
    }

    fn output(session: InteractiveSession<&[u8], Vec<u8>>) -> String {
        String::from_utf8(session.writer).expect("utf-8")
    }

    #[test]
    fn menu_choice_defaults_to_start() {
        assert_eq!(MenuChoice::parse(""), MenuChoice::Start);
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Start);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Start);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::Configure);
        assert_eq!(MenuChoice::parse(" 0 "), MenuChoice::Exit);
    }

    #[test]
    fn interval_input_rejects_non_positive_and_garbage() {
        assert_eq!(IntervalInput::parse("  "), IntervalInput::Keep);
        assert_eq!(IntervalInput::parse("20"), IntervalInput::Set(20));
        assert_eq!(IntervalInput::parse("0"), IntervalInput::Invalid);
        assert_eq!(IntervalInput::parse("-5"), IntervalInput::Invalid);
        assert_eq!(IntervalInput::parse("soon"), IntervalInput::Invalid);
    }

    #[tokio::test]
    async fn menu_reads_choice() {
        let mut s = session("2\n");
        assert_eq!(s.menu().await.expect("io"), MenuChoice::Configure);
        assert!(output(s).contains("0. Exit"));

        let mut s = session("");
        assert_eq!(s.menu().await.expect("io"), MenuChoice::Start);
    }

    #[tokio::test]
    async fn configure_sets_interval_and_saves() {
        let dir = TempDir::new().expect("tempdir");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));

        let mut s = session("30\ny\n");
        let config = s.configure(&store).await.expect("io");

        assert_eq!(config.reminder_interval, 30);
        assert_eq!(store.load(), config);
        let out = output(s);
        assert!(out.contains("Current reminder interval: 15 minutes"));
        assert!(out.contains("Configuration saved"));
    }

    #[tokio::test]
    async fn configure_keeps_interval_on_invalid_input_and_skips_save() {
        let dir = TempDir::new().expect("tempdir");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));
        write(store.path(), r#"{ "reminder_interval": 45 }"#).expect("write");

        let mut s = session("abc\nn\n");
        let config = s.configure(&store).await.expect("io");

        assert_eq!(config.reminder_interval, 45);
        assert_eq!(read_to_string(store.path()).expect("read"), r#"{ "reminder_interval": 45 }"#);
        assert!(output(s).contains("Invalid interval"));
    }

    #[tokio::test]
    async fn configure_returns_unsaved_change_on_closed_input() {
        let dir = TempDir::new().expect("tempdir");
        let store = ConfigStore::new(dir.path().join(CONFIG_FILENAME));

        let mut s = session("5\n");
        let config = s.configure(&store).await.expect("io");

        assert_eq!(config.reminder_interval, 5);
        assert!(!store.path().exists());
    }
}
