//! Time keeping module for PineTime
//!
//! The watch has no battery-backed RTC, so wall-clock time is the build
//! time plus the uptime since boot.

use bradwatch::Clock;
use chrono::{DateTime, Duration as TimeDelta, FixedOffset, NaiveDateTime, Offset, Utc};
use embassy_time::Instant;

// UTC epoch and local offset of the build host, generated by `build.rs`
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// Wall-clock time paired with the uptime it was taken at
#[derive(Clone, Copy)]
pub struct TimeReference {
    /// Clock time in UTC
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from seconds since the Unix epoch
    pub fn from_unix_epoch(secs: i64) -> Self {
        Self {
            time: DateTime::from_timestamp(secs, 0)
                .map(|utc| utc.naive_utc())
                .unwrap_or_default(),
            instant: Instant::now(),
        }
    }
}

/// Local clock derived from a [`TimeReference`] and a fixed UTC offset
#[derive(Clone, Copy)]
pub struct TimeManager {
    reference: TimeReference,
    offset: FixedOffset,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(utc_epoch: i64, utc_offset: i32) -> Self {
        Self {
            reference: TimeReference::from_unix_epoch(utc_epoch),
            offset: FixedOffset::east_opt(utc_offset).unwrap_or(Utc.fix()),
        }
    }

    /// Current time in UTC
    pub fn utc(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference
            .time
            .checked_add_signed(TimeDelta::microseconds(elapsed.as_micros() as i64))
            .unwrap_or(self.reference.time)
    }
}

impl Clock for TimeManager {
    fn now(&self) -> NaiveDateTime {
        self.utc() + self.offset
    }
}
