//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use bradwatch::ChargeState;
use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

/// Battery API
pub struct Battery<'a> {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
    /// Last sampled state
    state: ChargeState,
}

impl<'a> Battery<'a> {
    /// Configure battery settings on boot and take a first sample
    pub async fn init(adc: Saadc<'a, 1>, charge_pin: Input<'a, P0_12>) -> Self {
        let mut battery = Self {
            adc,
            pin_charge_indication: charge_pin,
            state: ChargeState::default(),
        };
        battery.state = battery.sample().await;
        battery
    }

    /// Return the stored state. To fetch current data, call `update()` first.
    pub fn state(&self) -> ChargeState {
        self.state
    }

    /// Sample the hardware again. Return whether the state changed.
    pub async fn update(&mut self) -> bool {
        let state = self.sample().await;
        let changed = state != self.state;
        self.state = state;
        changed
    }

    async fn sample(&mut self) -> ChargeState {
        let mut buf = [0; 1];
        self.adc.sample(&mut buf).await;
        ChargeState::from_adc(buf[0], self.pin_charge_indication.is_low())
    }
}
