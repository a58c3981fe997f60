use std::error::Error as StdError;

use thiserror::Error as ThisError;

type ErasedError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, ThisError)]
pub enum NotifierError {
    #[error("notification backend error: {0}")]
    Backend(#[source] ErasedError),

    #[error("notification backend unavailable: {0}")]
    Unavailable(String),
}

impl NotifierError {
    pub fn by_backend(source: impl Into<ErasedError>) -> NotifierError {
        NotifierError::Backend(source.into())
    }
}

/// `ReminderConfig` の不変条件違反。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InvalidConfig {
    #[error("reminder_interval must be positive")]
    ZeroInterval,

    #[error("reminder_messages must not be empty")]
    NoMessages,
}
