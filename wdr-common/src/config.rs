mod error;

pub use error::ConfigError;

use std::{
    env::current_exe,
    fs::{read_to_string, write},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{error, info, warn};
use wdr_core::{CONFIG_FILENAME, model::config::ReminderConfig};

/// 単一の設定ファイルに対する読み書き。
///
/// 単一プロセス・単一書き込み者を前提としており、ロックはしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> ConfigStore {
        ConfigStore { path: path.into() }
    }

    /// 実行ファイルと同じディレクトリの config.json を指す。
    pub fn beside_executable() -> Result<ConfigStore, ConfigError> {
        let executable = current_exe()?;
        let directory = executable.parent().ok_or(ConfigError::NoExecutableDirectory)?;
        Ok(ConfigStore::new(directory.join(CONFIG_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 設定を読み込む。失敗した場合はログに残して既定値を返す。
    pub fn load(&self) -> ReminderConfig {
        match self.load_strict() {
            Ok(config) => config,
            Err(err) => {
                error!("failed to load config file {}: {err}", self.path.display());
                warn!("falling back to default config");
                ReminderConfig::default()
            }
        }
    }

    /// 設定を読み込む。ファイルが存在しない場合のみ既定値で成功する。
    pub fn load_strict(&self) -> Result<ReminderConfig, ConfigError> {
        let config_str = match read_to_string(&self.path) {
            Ok(s) => s,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ReminderConfig::default()),
            Err(err) => return Err(err.into()),
        };

        // 配列などはフィールド順に読めてしまうので、オブジェクトに限る
        let Value::Object(fields) = serde_json::from_str::<Value>(&config_str)? else {
            return Err(ConfigError::NotAnObject);
        };
        let config: ReminderConfig = serde_json::from_value(Value::Object(fields))?;
        config.validate()?;
        Ok(config)
    }

    /// 設定を書き出す。失敗はログに残すだけで呼び出し元には返さない。
    pub fn save(&self, config: &ReminderConfig) {
        if let Err(err) = self.try_save(config) {
            error!("failed to save config file {}: {err}", self.path.display());
        }
    }

    pub fn try_save(&self, config: &ReminderConfig) -> Result<(), ConfigError> {
        let config_str = serde_json::to_string_pretty(config)?;
        write(&self.path, config_str)?;
        info!("config saved to {}", self.path.display());
        Ok(())
    }
}
