//! Clock field formatting

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicBool, Ordering};

use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::String;

/// "HH:MM"
pub const HOUR_MINUTE_LEN: usize = 5;
/// "SS"
pub const SECONDS_LEN: usize = 2;
/// "YYYY.DDD", with room for the widest years chrono can represent ("-262144.366")
pub const YEAR_DAY_LEN: usize = 12;
/// "September 30"
pub const MONTH_DAY_LEN: usize = 16;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Source of the current local wall-clock time.
pub trait Clock {
    /// Sample the current time, already resolved to the local timezone.
    fn now(&self) -> NaiveDateTime;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// The user's 12/24-hour display setting.
pub trait ClockPreference {
    fn use_24h(&self) -> bool;
}

impl ClockPreference for bool {
    fn use_24h(&self) -> bool {
        *self
    }
}

impl ClockPreference for AtomicBool {
    fn use_24h(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T> ClockPreference for &T
where
    T: ClockPreference + ?Sized,
{
    fn use_24h(&self) -> bool {
        (**self).use_24h()
    }
}

/// Text shown in the clock fields of the watchface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStrings {
    /// "14:07" or "02:07"
    pub hour_minute: String<HOUR_MINUTE_LEN>,
    /// "09"
    pub seconds: String<SECONDS_LEN>,
    /// "AM", "PM", or "24" when the 24-hour format is active
    pub meridiem: &'static str,
    /// "2024.065"
    pub year_day: String<YEAR_DAY_LEN>,
    /// "March  5"
    pub month_day: String<MONTH_DAY_LEN>,
    /// "Tuesday"
    pub weekday: &'static str,
}

/// Format `now` into the clock fields.
///
/// In 12-hour mode midnight and noon both show as 12. Leap seconds show as
/// 59. The result depends only on the arguments.
pub fn format_clock<T>(now: &T, use_24h: bool) -> DisplayStrings
where
    T: Datelike + Timelike,
{
    let (hour, meridiem) = if use_24h {
        (now.hour(), "24")
    } else {
        let (pm, hour) = now.hour12();
        (hour, if pm { "PM" } else { "AM" })
    };

    DisplayStrings {
        hour_minute: render(format_args!("{:02}:{:02}", hour, now.minute())),
        seconds: render(format_args!("{:02}", now.second())),
        meridiem,
        year_day: render(format_args!("{:04}.{:03}", now.year(), now.ordinal())),
        month_day: render(format_args!(
            "{} {:>2}",
            MONTH_NAMES[now.month0() as usize],
            now.day()
        )),
        weekday: WEEKDAY_NAMES[now.weekday().num_days_from_monday() as usize],
    }
}

/// Write `args` into a fresh fixed-capacity string.
///
/// The capacities above fit every value chrono produces, so the write never
/// runs out of room.
pub(crate) fn render<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    let _ = out.write_fmt(args);
    out
}
