//! Binds the watchface state to a display

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use super::DefaultWatchface;
use crate::{
    clock::{Clock, ClockPreference},
    events::{Event, Subscriber},
    watchface::Watchface,
};

/// A watchface drawn onto a display.
///
/// Owns the display, the view, and the state behind it. Each event repaints
/// only the fields it changed.
pub struct WatchScreen<'a, D, C, P> {
    target: D,
    view: DefaultWatchface<'a>,
    face: Watchface<C, P>,
}

impl<'a, D, C, P> WatchScreen<'a, D, C, P>
where
    D: DrawTarget<Color = Rgb565>,
    C: Clock,
    P: ClockPreference,
{
    pub fn new(target: D, view: DefaultWatchface<'a>, face: Watchface<C, P>) -> Self {
        Self { target, view, face }
    }

    /// Paint the whole screen from the current state.
    pub fn draw(&mut self) -> Result<(), D::Error> {
        self.view
            .draw(&mut self.target, self.face.clock_text(), self.face.battery_text())
    }

    pub fn face(&self) -> &Watchface<C, P> {
        &self.face
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Give the display back.
    pub fn release(self) -> D {
        self.target
    }
}

impl<'a, D, C, P> Subscriber for WatchScreen<'a, D, C, P>
where
    D: DrawTarget<Color = Rgb565>,
    C: Clock,
    P: ClockPreference,
{
    type Error = D::Error;

    fn notify(&mut self, event: Event) -> Result<(), Self::Error> {
        match event {
            Event::Tick { .. } => {
                let text = self.face.refresh_clock();
                self.view.draw_clock(&mut self.target, text)
            }
            Event::BatteryStateChanged(charge) => {
                let text = self.face.set_charge_state(charge);
                self.view.draw_battery(&mut self.target, text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::{
        battery::ChargeState,
        events::{Publisher, Subscription, TimeUnit},
        ui::{testing::Canvas, Background, Layout},
    };

    fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn view() -> DefaultWatchface<'static> {
        DefaultWatchface::new(Layout::PINETIME, Background::Solid(Rgb565::WHITE), Rgb565::BLACK)
    }

    #[test]
    fn tick_repaints_clock_fields() {
        let now = Cell::new(at(14, 7, 9));
        let face = Watchface::new(|| now.get(), true, ChargeState::new(57, false));
        let mut screen = WatchScreen::new(Canvas::new(Rgb565::WHITE), view(), face);
        screen.draw().unwrap();
        let before = screen.target().clone();

        now.set(at(14, 7, 10));
        screen
            .notify(Event::Tick {
                changed: TimeUnit::Second,
            })
            .unwrap();

        assert_eq!(screen.face().clock_text().seconds, "10");
        let changed = screen.target().changed_points(&before);
        assert!(!changed.is_empty());
        for point in changed {
            assert!(Layout::PINETIME.seconds.contains(point), "{point:?} changed");
        }
    }

    #[test]
    fn published_battery_change_repaints_battery_field() {
        let face = Watchface::new(|| at(9, 30, 0), false, ChargeState::new(57, false));
        let mut screen = WatchScreen::new(Canvas::new(Rgb565::WHITE), view(), face);
        screen.draw().unwrap();
        let before = screen.target().clone();

        let mut publisher: Publisher<'_, _, 1> = Publisher::new();
        publisher
            .subscribe(&mut screen, Subscription::new().tick(TimeUnit::Second).battery())
            .unwrap();
        let delivered = publisher
            .publish(Event::BatteryStateChanged(ChargeState::new(57, true)))
            .unwrap();
        assert_eq!(delivered, 1);
        drop(publisher);

        assert_eq!(screen.face().battery_text(), "----");
        let canvas = screen.release();
        let changed = canvas.changed_points(&before);
        assert!(!changed.is_empty());
        for point in changed {
            assert!(Layout::PINETIME.battery.contains(point), "{point:?} changed");
        }
    }
}
