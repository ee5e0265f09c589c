//! Default watchface

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_9X15},
        MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
};
use profont::PROFONT_24_POINT;

use super::{Background, Label, Layout};
use crate::clock::DisplayStrings;

/// Basic digital watchface
pub struct DefaultWatchface<'a> {
    background: Background<'a>,
    /// Time label
    pub hour_minute: Label,
    pub seconds: Label,
    /// AM/PM or 24-hour marker
    pub meridiem: Label,
    pub weekday: Label,
    /// Power indicator label
    pub battery: Label,
    pub month_day: Label,
    pub year_day: Label,
}

impl<'a> DefaultWatchface<'a> {
    /// Create new watchface with text drawn in `foreground`
    pub fn new(layout: Layout, background: Background<'a>, foreground: Rgb565) -> Self {
        let large = MonoTextStyle::new(&PROFONT_24_POINT, foreground);
        let medium = MonoTextStyle::new(&FONT_10X20, foreground);
        let small = MonoTextStyle::new(&FONT_9X15, foreground);

        Self {
            background,
            hour_minute: Label::new(layout.hour_minute, large),
            seconds: Label::new(layout.seconds, medium),
            meridiem: Label::new(layout.meridiem, small),
            weekday: Label::new(layout.weekday, small),
            battery: Label::new(layout.battery, small),
            month_day: Label::new(layout.month_day, medium),
            year_day: Label::new(layout.year_day, medium),
        }
    }

    pub fn background(&self) -> &Background<'a> {
        &self.background
    }

    /// Paint background and every field.
    pub fn draw<D>(&self, target: &mut D, clock: &DisplayStrings, battery: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.draw_background(target)?;
        self.draw_clock(target, clock)?;
        self.draw_battery(target, battery)
    }

    pub fn draw_background<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.background.draw(target)
    }

    /// Repaint the six clock fields.
    pub fn draw_clock<D>(&self, target: &mut D, clock: &DisplayStrings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let bg = &self.background;
        self.hour_minute.draw(target, &clock.hour_minute, bg)?;
        self.seconds.draw(target, &clock.seconds, bg)?;
        self.meridiem.draw(target, clock.meridiem, bg)?;
        self.weekday.draw(target, clock.weekday, bg)?;
        self.month_day.draw(target, &clock.month_day, bg)?;
        self.year_day.draw(target, &clock.year_day, bg)
    }

    /// Repaint the battery field only.
    pub fn draw_battery<D>(&self, target: &mut D, battery: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.battery.draw(target, battery, &self.background)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use embedded_graphics::{
        image::ImageRawBE,
        primitives::Rectangle,
        text::{renderer::TextRenderer, Baseline},
    };

    use super::*;
    use crate::{
        battery::{format_battery, ChargeState},
        clock::format_clock,
        ui::testing::{inside_any, Canvas},
        ui::{LCD_H, LCD_W},
    };

    fn strings() -> DisplayStrings {
        let now = NaiveDate::from_ymd_opt(2024, 9, 25)
            .unwrap()
            .and_hms_opt(10, 42, 7)
            .unwrap();
        format_clock(&now, false)
    }

    fn view() -> DefaultWatchface<'static> {
        DefaultWatchface::new(Layout::PINETIME, Background::Solid(Rgb565::WHITE), Rgb565::BLACK)
    }

    fn fits(label: &Label, text: &str) -> bool {
        let size = label
            .style()
            .measure_string(text, Point::zero(), Baseline::Middle)
            .bounding_box
            .size;
        size.width <= label.region().size.width && size.height <= label.region().size.height
    }

    #[test]
    fn layout_regions_are_on_screen_and_disjoint() {
        let screen = Rectangle::new(Point::zero(), Size::new(LCD_W, LCD_H));
        let regions = Layout::PINETIME.regions();
        for (i, a) in regions.iter().enumerate() {
            assert_eq!(screen.intersection(a), *a, "region {i} leaves the screen");
            for b in &regions[i + 1..] {
                assert!(a.intersection(b).is_zero_sized(), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn worst_case_text_fits_every_region() {
        let view = view();
        assert!(fits(&view.hour_minute, "00:00"));
        assert!(fits(&view.seconds, "59"));
        assert!(fits(&view.meridiem, "PM"));
        assert!(fits(&view.weekday, "Wednesday"));
        assert!(fits(&view.battery, "255%"));
        assert!(fits(&view.battery, "----"));
        assert!(fits(&view.month_day, "September 30"));
        assert!(fits(&view.year_day, "-262144.366"));
    }

    #[test]
    fn text_is_drawn_only_inside_field_regions() {
        let mut canvas = Canvas::new(Rgb565::RED);
        let regions = Layout::PINETIME.regions();
        view()
            .draw(&mut canvas, &strings(), &format_battery(ChargeState::new(64, false)))
            .unwrap();

        assert!(canvas.points_with(Rgb565::RED).is_empty());
        for point in canvas.points_with(Rgb565::BLACK) {
            assert!(inside_any(&regions, point), "stray pixel at {point:?}");
        }
        for region in &regions {
            assert!(canvas.count_in(region, Rgb565::BLACK) > 0, "{region:?} is empty");
        }
    }

    #[test]
    fn battery_redraw_touches_only_battery_region() {
        let view = view();
        let mut canvas = Canvas::new(Rgb565::WHITE);
        view.draw(&mut canvas, &strings(), "64%").unwrap();
        let before = canvas.clone();

        view.draw_battery(&mut canvas, "----").unwrap();

        let changed = canvas.changed_points(&before);
        assert!(!changed.is_empty());
        for point in changed {
            assert!(Layout::PINETIME.battery.contains(point), "{point:?} changed");
        }
    }

    #[test]
    fn clock_redraw_leaves_battery_alone() {
        let view = view();
        let mut canvas = Canvas::new(Rgb565::WHITE);
        view.draw(&mut canvas, &strings(), "64%").unwrap();
        let before = canvas.clone();

        let later = NaiveDate::from_ymd_opt(2024, 9, 25)
            .unwrap()
            .and_hms_opt(10, 43, 18)
            .unwrap();
        view.draw_clock(&mut canvas, &format_clock(&later, false)).unwrap();

        let changed = canvas.changed_points(&before);
        assert!(!changed.is_empty());
        for point in changed {
            assert!(!Layout::PINETIME.battery.contains(point), "{point:?} changed");
        }
    }

    #[test]
    fn image_background_is_restored_behind_fields() {
        let data: std::vec::Vec<u8> = (0..LCD_W * LCD_H)
            .flat_map(|_| Rgb565::BLUE.into_storage().to_be_bytes())
            .collect();
        let view = DefaultWatchface::new(
            Layout::PINETIME,
            Background::Image(ImageRawBE::new(&data, LCD_W)),
            Rgb565::BLACK,
        );

        let mut canvas = Canvas::new(Rgb565::RED);
        view.draw_clock(&mut canvas, &strings()).unwrap();

        let seconds = Layout::PINETIME.seconds;
        assert_eq!(canvas.pixel(seconds.top_left), Rgb565::BLUE);
        assert!(canvas.count_in(&seconds, Rgb565::BLACK) > 0);
        // Untouched until the battery or the full screen is drawn
        assert_eq!(canvas.pixel(Layout::PINETIME.battery.top_left), Rgb565::RED);
        assert_eq!(canvas.pixel(Point::new(0, 0)), Rgb565::RED);

        view.draw_background(&mut canvas).unwrap();
        assert!(canvas.points_with(Rgb565::BLUE).len() == (LCD_W * LCD_H) as usize);
    }
}
