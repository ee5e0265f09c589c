#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod peripherals;
#[cfg(target_os = "none")]
mod system;

#[cfg(target_os = "none")]
mod firmware {
    use core::sync::atomic::AtomicBool;

    // Panic handler and debugging
    use defmt::unwrap;
    use defmt_rtt as _;
    use panic_probe as _;

    // Device
    use embassy_executor::Spawner;
    use embassy_futures::select::{select, Either};
    use embassy_nrf::{
        bind_interrupts,
        gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
        peripherals::SPI2,
        saadc::{self, ChannelConfig, Resolution, Saadc},
        spim,
    };
    use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
    use embassy_time::{Duration, Ticker, Timer};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    // Crate
    use crate::peripherals::{
        backlight::Backlight,
        battery::Battery,
        display::{self, Lcd},
    };
    use crate::system::{
        config::SystemConfig,
        time::{TimeManager, UTC_EPOCH, UTC_OFFSET},
    };
    use bradwatch::{
        ui::{Background, DefaultWatchface, Layout, WatchScreen},
        ChargeState, Clock, Event, Publisher, Subscription, TimeUnit, Watchface,
    };

    bind_interrupts!(struct Irqs {
        SAADC => saadc::InterruptHandler;
        SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
    });

    const BACKLIGHT_LEVEL: u8 = 2;

    // Communication channels
    static BATTERY_STATUS: Signal<ThreadModeRawMutex, ChargeState> = Signal::new();

    /// 12/24-hour system setting, read on every clock refresh.
    static CLOCK_24H: AtomicBool = AtomicBool::new(true);

    type Screen = WatchScreen<'static, Lcd, TimeManager, &'static AtomicBool>;

    /// Sample the battery every second and signal changes.
    #[embassy_executor::task(pool_size = 1)]
    async fn update_battery_status(mut battery: Battery<'static>) {
        loop {
            if battery.update().await {
                defmt::info!("Battery status updated");
                BATTERY_STATUS.signal(battery.state());
            }

            // Re-schedule the timer interrupt in 1s
            Timer::after(Duration::from_secs(1)).await;
        }
    }

    /// Publish ticks and battery changes to the watchface.
    #[embassy_executor::task(pool_size = 1)]
    async fn run_watchface(mut screen: Screen, clock: TimeManager, _backlight: Backlight<'static>) {
        // Initial frame before the first tick
        if let Err(e) = screen.draw() {
            defmt::error!("Drawing watchface failed: {}", defmt::Debug2Format(&e));
        }

        let mut publisher: Publisher<'_, Screen, 1> = Publisher::new();
        let subscription = Subscription::new().tick(TimeUnit::Second).battery();
        if let Err(e) = publisher.subscribe(&mut screen, subscription) {
            defmt::error!("{}", defmt::Display2Format(&e));
            return;
        }

        let mut tick = Ticker::every(Duration::from_secs(1));
        let mut last = clock.now();
        loop {
            let event = match select(tick.next(), BATTERY_STATUS.wait()).await {
                Either::First(()) => {
                    let now = clock.now();
                    let changed = TimeUnit::largest_changed(&last, &now);
                    last = now;
                    Event::Tick { changed }
                }
                Either::Second(status) => {
                    defmt::info!(
                        "Battery status: {} ({})",
                        status.percent,
                        if status.charging {
                            "charging"
                        } else {
                            "discharging"
                        }
                    );
                    Event::BatteryStateChanged(status)
                }
            };

            if let Err(e) = publisher.publish(event) {
                defmt::error!("Redrawing {} failed: {}", event, defmt::Debug2Format(&e));
            }
        }
    }

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        let p = embassy_nrf::init(SystemConfig::new());
        defmt::info!("Initializing");

        // Initialize SAADC
        let mut saadc_config = saadc::Config::default();
        // Set resolution to 12bit, necessary for correct battery status calculation
        saadc_config.resolution = Resolution::_12BIT;
        // Pin P0.31: Voltage level
        let channel_config = ChannelConfig::single_ended(p.P0_31);
        let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
        saadc.calibrate().await;

        // Initialize battery, pin P0.12: high = battery, low = charging
        let battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None)).await;

        // Initialize backlight, off until the first frame is ready
        let mut backlight = Backlight::init(
            Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
            Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
            Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
            0,
        );

        // Initialize SPI
        let mut spim_config = spim::Config::default();
        // Use SPI at 8MHz (the fastest clock available on the nRF52832),
        // otherwise refreshing will be super slow.
        spim_config.frequency = spim::Frequency::M8;
        // SPI must be used in mode 3. Mode 0 (the default) won't work.
        spim_config.mode = spim::MODE_3;

        let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

        // Initialize LCD
        let lcd = display::init(
            spim,
            Output::new(p.P0_25, Level::High, OutputDrive::Standard),
            Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
            Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        );

        // Watchface
        let clock = TimeManager::init(UTC_EPOCH, UTC_OFFSET);
        let face = Watchface::new(clock, &CLOCK_24H, battery.state());
        let view = DefaultWatchface::new(
            Layout::PINETIME,
            Background::Solid(Rgb565::WHITE),
            Rgb565::BLACK,
        );
        let screen = WatchScreen::new(lcd, view, face);
        backlight.set(BACKLIGHT_LEVEL);

        defmt::info!("Initialization finished");

        // Schedule tasks
        unwrap!(spawner.spawn(update_battery_status(battery)));
        unwrap!(spawner.spawn(run_watchface(screen, clock, backlight)));
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("bradwatch is PineTime firmware, build it with `--target thumbv7em-none-eabihf`");
}
