//! Tick and battery event delivery
//!
//! The host (a timer and the battery sampler) publishes [`Event`]s. Anything
//! that wants them implements [`Subscriber`] and registers with a
//! [`Publisher`], stating in a [`Subscription`] which events it cares about.

use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::Vec;

use crate::{battery::ChargeState, error::Error};

/// Calendar units, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// The coarsest unit that differs between two times.
    ///
    /// Falls back to [`TimeUnit::Second`] when nothing changed, since a tick
    /// was still delivered.
    pub fn largest_changed(prev: &NaiveDateTime, now: &NaiveDateTime) -> Self {
        if prev.year() != now.year() {
            Self::Year
        } else if prev.month() != now.month() {
            Self::Month
        } else if prev.day() != now.day() {
            Self::Day
        } else if prev.hour() != now.hour() {
            Self::Hour
        } else if prev.minute() != now.minute() {
            Self::Minute
        } else {
            Self::Second
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Event {
    /// Timer tick; `changed` is the coarsest unit that rolled over.
    Tick { changed: TimeUnit },
    /// The battery reported a new charge state.
    BatteryStateChanged(ChargeState),
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscription {
    tick: Option<TimeUnit>,
    battery: bool,
}

impl Subscription {
    /// Subscribe to nothing
    pub const fn new() -> Self {
        Self {
            tick: None,
            battery: false,
        }
    }

    /// Receive ticks whenever `unit` or anything coarser changes.
    pub const fn tick(mut self, unit: TimeUnit) -> Self {
        self.tick = Some(unit);
        self
    }

    /// Receive battery state changes.
    pub const fn battery(mut self) -> Self {
        self.battery = true;
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        match event {
            Event::Tick { changed } => self.tick.is_some_and(|unit| *changed >= unit),
            Event::BatteryStateChanged(_) => self.battery,
        }
    }
}

pub trait Subscriber {
    type Error;

    /// Handle a delivered event.
    fn notify(&mut self, event: Event) -> Result<(), Self::Error>;
}

/// Fans events out to up to `N` subscribers.
pub struct Publisher<'a, S, const N: usize> {
    subscribers: Vec<(Subscription, &'a mut S), N>,
}

impl<'a, S, const N: usize> Default for Publisher<'a, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, const N: usize> Publisher<'a, S, N> {
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register `subscriber` for the events selected by `subscription`.
    pub fn subscribe(
        &mut self,
        subscriber: &'a mut S,
        subscription: Subscription,
    ) -> Result<(), Error> {
        self.subscribers
            .push((subscription, subscriber))
            .map_err(|_| Error::SubscriberLimit(N))
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<'a, S, const N: usize> Publisher<'a, S, N>
where
    S: Subscriber,
{
    /// Deliver `event` to every matching subscriber in registration order.
    ///
    /// Returns how many subscribers received it. Delivery stops at the first
    /// subscriber that fails.
    pub fn publish(&mut self, event: Event) -> Result<usize, S::Error> {
        let mut delivered = 0;
        for (subscription, subscriber) in self.subscribers.iter_mut() {
            if subscription.matches(&event) {
                subscriber.notify(event)?;
                delivered += 1;
            }
        }
        Ok(delivered)
    }
}
