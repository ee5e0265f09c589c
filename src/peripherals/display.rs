//! Display control module for PineTime

use bradwatch::ui::{LCD_H, LCD_W};
use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26, SPI2},
    spim::Spim,
};
use embassy_time::Delay;
use mipidsi::{models::ST7789, Builder, Orientation};

/// ST7789 panel on SPIM2
pub type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, P0_18>, Output<'static, P0_25>>,
    ST7789,
    Output<'static, P0_26>,
>;

/// Initialize the display
pub fn init(
    spim: Spim<'static, SPI2>,
    cs: Output<'static, P0_25>,
    dc: Output<'static, P0_18>,
    rst: Output<'static, P0_26>,
) -> Lcd {
    Builder::st7789(SPIInterface::new(spim, dc, cs))
        .with_display_size(LCD_W as u16, LCD_H as u16)
        .with_orientation(Orientation::Portrait(false))
        .init(&mut Delay, Some(rst))
        .unwrap()
}
