//! Battery status and formatting
//!
//! Voltage conversion follows https://wiki.pine64.org/wiki/PineTime: the
//! battery voltage is halved by a divider before it reaches the 12-bit SAADC.

use heapless::String;

use crate::clock::render;

/// Shown instead of the percentage while the watch charges.
pub const CHARGING_PLACEHOLDER: &str = "----";

pub const BATTERY_TEXT_LEN: usize = 16;

pub type BatteryText = String<BATTERY_TEXT_LEN>;

/// Snapshot of the battery taken by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct ChargeState {
    /// Charge in percent, nominally 0–100
    pub percent: u8,
    /// Whether the watch sits on the charger
    pub charging: bool,
}

impl ChargeState {
    pub const fn new(percent: u8, charging: bool) -> Self {
        Self { percent, charging }
    }

    /// Build a charge state from a raw 12-bit SAADC sample.
    pub fn from_adc(sample: i16, charging: bool) -> Self {
        Self {
            percent: percent_from_millivolts(millivolts_from_adc(sample)),
            charging,
        }
    }
}

/// Battery voltage in millivolts for a 12-bit SAADC sample.
pub fn millivolts_from_adc(sample: i16) -> u16 {
    // Use u32 during calculation to prevent overflow
    (sample.max(0) as u32 * 2000 / 1241) as u16
}

/// Estimate remaining capacity from the battery voltage.
///
/// Fixed data points with linear interpolation in between.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}

/// Format the battery field.
pub fn format_battery(state: ChargeState) -> BatteryText {
    if state.charging {
        render(format_args!("{}", CHARGING_PLACEHOLDER))
    } else {
        render(format_args!("{}%", state.percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_percentage() {
        assert_eq!(format_battery(ChargeState::new(57, false)), "57%");
        assert_eq!(format_battery(ChargeState::new(100, false)), "100%");
        assert_eq!(format_battery(ChargeState::new(0, false)), "0%");
    }

    #[test]
    fn charging_overrides_percentage() {
        assert_eq!(format_battery(ChargeState::new(0, true)), "----");
        assert_eq!(format_battery(ChargeState::new(100, true)), "----");
    }

    #[test]
    fn out_of_range_percentage_is_printed_verbatim() {
        assert_eq!(format_battery(ChargeState::new(u8::MAX, false)), "255%");
    }

    #[test]
    fn formatting_is_idempotent() {
        let state = ChargeState::new(42, false);
        assert_eq!(format_battery(state), format_battery(state));
    }

    #[test]
    fn converts_adc_samples_to_millivolts() {
        assert_eq!(millivolts_from_adc(0), 0);
        assert_eq!(millivolts_from_adc(-12), 0);
        assert_eq!(millivolts_from_adc(1241), 2000);
        assert_eq!(millivolts_from_adc(2606), 4199);
    }

    #[test]
    fn estimates_percent_along_discharge_curve() {
        assert_eq!(percent_from_millivolts(3000), 0);
        assert_eq!(percent_from_millivolts(3449), 0);
        assert_eq!(percent_from_millivolts(3450), 0);
        assert_eq!(percent_from_millivolts(3600), 30);
        assert_eq!(percent_from_millivolts(3699), 49);
        assert_eq!(percent_from_millivolts(3700), 50);
        assert_eq!(percent_from_millivolts(4000), 80);
        assert_eq!(percent_from_millivolts(4199), 99);
        assert_eq!(percent_from_millivolts(4200), 100);
        assert_eq!(percent_from_millivolts(u16::MAX), 100);
    }

    #[test]
    fn charge_state_from_adc_keeps_charging_flag() {
        let state = ChargeState::from_adc(2606, true);
        assert_eq!(state, ChargeState::new(99, true));
        assert_eq!(format_battery(state), CHARGING_PLACEHOLDER);
    }
}
