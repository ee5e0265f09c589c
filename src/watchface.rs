//! Watchface state

use core::convert::Infallible;

use crate::{
    battery::{format_battery, BatteryText, ChargeState},
    clock::{format_clock, Clock, ClockPreference, DisplayStrings},
    events::{Event, Subscriber},
};

/// Latest text for every field of the watchface.
///
/// The time and the 12/24-hour preference are sampled again on every
/// refresh, never cached.
pub struct Watchface<C, P> {
    clock: C,
    preference: P,
    clock_text: DisplayStrings,
    charge: ChargeState,
    battery_text: BatteryText,
}

impl<C, P> Watchface<C, P>
where
    C: Clock,
    P: ClockPreference,
{
    /// Create the watchface with every field already filled in.
    pub fn new(clock: C, preference: P, charge: ChargeState) -> Self {
        let clock_text = format_clock(&clock.now(), preference.use_24h());
        Self {
            clock,
            preference,
            clock_text,
            charge,
            battery_text: format_battery(charge),
        }
    }

    /// Sample the clock and reformat the clock fields.
    pub fn refresh_clock(&mut self) -> &DisplayStrings {
        self.clock_text = format_clock(&self.clock.now(), self.preference.use_24h());
        &self.clock_text
    }

    /// Store a new charge state and reformat the battery field.
    pub fn set_charge_state(&mut self, charge: ChargeState) -> &str {
        self.charge = charge;
        self.battery_text = format_battery(charge);
        &self.battery_text
    }

    pub fn clock_text(&self) -> &DisplayStrings {
        &self.clock_text
    }

    pub fn battery_text(&self) -> &str {
        &self.battery_text
    }

    pub fn charge_state(&self) -> ChargeState {
        self.charge
    }
}

impl<C, P> Subscriber for Watchface<C, P>
where
    C: Clock,
    P: ClockPreference,
{
    type Error = Infallible;

    fn notify(&mut self, event: Event) -> Result<(), Self::Error> {
        match event {
            Event::Tick { .. } => {
                self.refresh_clock();
            }
            Event::BatteryStateChanged(charge) => {
                self.set_charge_state(charge);
            }
        }
        Ok(())
    }
}
