//! Digital watchface for the PineTime
//!
//! The library formats the clock and battery fields shown on the watch and
//! draws them with `embedded-graphics`. It is `no_std` and allocation free, so
//! the same code runs on the watch and in host tests. The firmware binary in
//! `main.rs` feeds it time ticks and battery changes through [`Publisher`].

#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod clock;
pub mod error;
pub mod events;
pub mod ui;
pub mod watchface;

pub use battery::{format_battery, BatteryText, ChargeState};
pub use clock::{format_clock, Clock, ClockPreference, DisplayStrings};
pub use error::Error;
pub use events::{Event, Publisher, Subscriber, Subscription, TimeUnit};
pub use watchface::Watchface;
