//! UI definitions module
//!
//! The formatters only produce text. Everything about where that text goes
//! on the 240x240 panel lives here: the [`Layout`] of the fields, the
//! [`Background`] behind them, and the [`Label`]s that draw them.

use embedded_graphics::{
    image::{Image, ImageDrawableExt, ImageRawBE},
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

mod default_watchface;
mod screen;

pub use default_watchface::DefaultWatchface;
pub use screen::WatchScreen;

pub const LCD_W: u32 = 240;
pub const LCD_H: u32 = 240;

/// Screen region of every watchface field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub battery: Rectangle,
    pub weekday: Rectangle,
    pub meridiem: Rectangle,
    pub hour_minute: Rectangle,
    pub seconds: Rectangle,
    pub month_day: Rectangle,
    pub year_day: Rectangle,
}

impl Layout {
    /// Status row on top, time in the middle, date rows at the bottom.
    pub const PINETIME: Layout = Layout {
        battery: Rectangle::new(Point::new(4, 4), Size::new(64, 20)),
        weekday: Rectangle::new(Point::new(68, 4), Size::new(112, 20)),
        meridiem: Rectangle::new(Point::new(180, 4), Size::new(56, 20)),
        hour_minute: Rectangle::new(Point::new(20, 76), Size::new(200, 48)),
        seconds: Rectangle::new(Point::new(90, 128), Size::new(60, 24)),
        month_day: Rectangle::new(Point::new(8, 176), Size::new(224, 24)),
        year_day: Rectangle::new(Point::new(8, 208), Size::new(224, 24)),
    };

    /// All regions, battery first.
    pub fn regions(&self) -> [Rectangle; 7] {
        [
            self.battery,
            self.weekday,
            self.meridiem,
            self.hour_minute,
            self.seconds,
            self.month_day,
            self.year_day,
        ]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::PINETIME
    }
}

/// What is drawn behind the text fields.
pub enum Background<'a> {
    Solid(Rgb565),
    /// Full-screen big-endian RGB565 bitmap
    Image(ImageRawBE<'a, Rgb565>),
}

impl Background<'_> {
    /// Paint the whole screen.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Solid(color) => target.clear(*color),
            Self::Image(raw) => Image::new(raw, Point::zero()).draw(target),
        }
    }

    /// Paint only the part of the background covered by `region`.
    pub fn repaint<D>(&self, target: &mut D, region: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Solid(color) => target.fill_solid(region, *color),
            Self::Image(raw) => Image::new(&raw.sub_image(region), region.top_left).draw(target),
        }
    }
}

/// A text field bound to a screen region.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    region: Rectangle,
    style: MonoTextStyle<'static, Rgb565>,
}

impl Label {
    pub fn new(region: Rectangle, style: MonoTextStyle<'static, Rgb565>) -> Self {
        Self { region, style }
    }

    pub fn region(&self) -> Rectangle {
        self.region
    }

    pub fn style(&self) -> &MonoTextStyle<'static, Rgb565> {
        &self.style
    }

    /// Repaint the region and draw `text` centered in it.
    ///
    /// Nothing outside the region is touched.
    pub fn draw<D>(&self, target: &mut D, text: &str, background: &Background<'_>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        background.repaint(target, &self.region)?;

        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        let mut clipped = target.clipped(&self.region);
        Text::with_text_style(text, self.region.center(), self.style, text_style).draw(&mut clipped)?;

        Ok(())
    }
}
