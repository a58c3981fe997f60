use crate::ScheduleError;

use std::fmt::{Display, Formatter, Result as FmtResult};

use time::{Duration, OffsetDateTime};

const MINUTES_PER_HOUR: u8 = 60;

/// 壁時計の「分」に固定された繰り返し規則。
///
/// 毎時 0 分から `step` 分おきに発火する。開始時刻からの相対間隔ではないので、
/// 登録直後の初回発火は `step` 分より早く来ることがある。
/// ```text
/// step = 15: |0 ... 15 ... 30 ... 45 ...|0 ...
/// step = 25: |0 ... 25 ... 50 ......... |0 ...
/// step >= 60: |0 ........................|0 ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    step: u8,
}

impl RecurrenceRule {
    pub fn every_minutes(interval: u32) -> Result<RecurrenceRule, ScheduleError> {
        if interval == 0 {
            return Err(ScheduleError::InvalidInterval);
        }
        let step = interval.min(MINUTES_PER_HOUR as u32) as u8;
        Ok(RecurrenceRule { step })
    }

    /// 発火する「分」の一覧。
    pub fn minutes(&self) -> impl Iterator<Item = u8> {
        (0..MINUTES_PER_HOUR).step_by(self.step as usize)
    }

    /// `now` より真に後で、最初に規則に一致する時刻。秒以下は 0 になる。
    pub fn next_after(&self, now: OffsetDateTime) -> OffsetDateTime {
        let truncated = now - Duration::seconds(now.second() as i64) - Duration::nanoseconds(now.nanosecond() as i64);
        let current_minute = now.minute();

        let minutes_ahead = match self.minutes().find(|m| *m > current_minute) {
            Some(next_minute) => next_minute - current_minute,
            None => MINUTES_PER_HOUR - current_minute,
        };
        truncated + Duration::minutes(minutes_ahead as i64)
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let minutes: Vec<_> = self.minutes().map(|m| m.to_string()).collect();
        write!(f, "minute {} of every hour", minutes.join(","))
    }
}
