use crate::ScheduleError;

use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

/// 起動時に確定したローカルオフセットで現在時刻を返す。
///
/// マルチスレッド環境ではオフセットを取得できないことがあるため、
/// ランタイム起動前に `detect` しておくこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    offset: UtcOffset,
}

impl LocalClock {
    pub fn new(offset: UtcOffset) -> LocalClock {
        LocalClock { offset }
    }

    pub fn try_detect() -> Result<LocalClock, ScheduleError> {
        let offset = UtcOffset::current_local_offset()?;
        Ok(LocalClock { offset })
    }

    pub fn detect() -> LocalClock {
        match LocalClock::try_detect() {
            Ok(clock) => clock,
            Err(err) => {
                warn!("{err}, using UTC");
                LocalClock::new(UtcOffset::UTC)
            }
        }
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}
