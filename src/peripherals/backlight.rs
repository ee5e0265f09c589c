//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::gpio::{AnyPin, Output};

/// There are three active-low backlight pins, each connected to a FET that
/// toggles backlight power through a resistor.
///
/// - Low: 2.2 kΩ
/// - Mid: 100 Ω
/// - High: 30 Ω
///
/// Through combinations of these pins, 7 brightness levels (+ off) can be
/// configured.
pub struct Backlight<'a> {
    low: Output<'a, AnyPin>,
    mid: Output<'a, AnyPin>,
    high: Output<'a, AnyPin>,
}

impl<'a> Backlight<'a> {
    /// Initialize the backlight with the specified level (0–7).
    pub fn init(
        low: Output<'a, AnyPin>,
        mid: Output<'a, AnyPin>,
        high: Output<'a, AnyPin>,
        brightness: u8,
    ) -> Self {
        let mut backlight = Self { low, mid, high };
        backlight.set(brightness);
        backlight
    }

    /// Set the brightness level. Values above 7 are clamped.
    pub fn set(&mut self, brightness: u8) {
        let brightness = brightness.min(7);
        defmt::debug!("Setting backlight brightness to {}", brightness);
        for (bit, pin) in [&mut self.low, &mut self.mid, &mut self.high]
            .into_iter()
            .enumerate()
        {
            if brightness & (1 << bit) > 0 {
                pin.set_low();
            } else {
                pin.set_high();
            }
        }
    }
}
