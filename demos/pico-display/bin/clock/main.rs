#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use defmt::{error, info};
use defmt_rtt as _;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use embedded_hal::delay::DelayNs;
use embedded_hal_bus::spi::ExclusiveDevice;
use fugit::RateExtU32;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use panic_probe as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Spi, Timer,
    clocks::init_clocks_and_plls,
    gpio::FunctionSpi,
    pac::{self, interrupt},
    pwm::{A, B, Channel, FreeRunning, Pwm3, Pwm4, Slice},
    rtc,
    watchdog::Watchdog,
};

use pico_display_clock::buttons::{self, SharedButtons};
use pico_display_clock::display::{FrameBuffer, PIXELS, PanelDisplay};
use pico_display_clock::rgb_led::PwmRgbLed;
use pico_display_clock::rtc::{POWER_ON_DATE, PicoRtc};
use pico_display_clock::time::{Duration, HardwareTimer};

use rainbow_clock::{ClockApp, ClockConfig, TimeDuration};

/// Type alias for the Display Pack RGB LED on GPIO6/7/8
pub type Led = PwmRgbLed<
    Channel<Slice<Pwm3, FreeRunning>, A>,
    Channel<Slice<Pwm3, FreeRunning>, B>,
    Channel<Slice<Pwm4, FreeRunning>, A>,
>;

#[entry]
fn main() -> ! {
    info!("=== Pico Display Rainbow Clock ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    info!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);
    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    // RTC starts at the power-on date every cold boot
    let rtc = rtc::RealTimeClock::new(pac.RTC, clocks.rtc_clock, &mut pac.RESETS, POWER_ON_DATE)
        .unwrap();

    // PWM for the RGB LED and the backlight
    let mut pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);

    // PWM3 for Red (GPIO6/A) and Green (GPIO7/B), PWM4 for Blue (GPIO8/A)
    pwm_slices.pwm3.set_ph_correct();
    pwm_slices.pwm3.set_div_int(125u8); // 125 MHz / 125 = 1 MHz
    pwm_slices.pwm3.set_top(1000u16); // 1 MHz / 1000 = 1 kHz PWM frequency
    pwm_slices.pwm3.enable();

    pwm_slices.pwm4.set_ph_correct();
    pwm_slices.pwm4.set_div_int(125u8);
    pwm_slices.pwm4.set_top(1000u16);
    pwm_slices.pwm4.enable();

    // PWM2 for the backlight (GPIO20/A)
    pwm_slices.pwm2.set_div_int(125u8);
    pwm_slices.pwm2.set_top(1000u16);
    pwm_slices.pwm2.enable();

    let mut red_channel = pwm_slices.pwm3.channel_a;
    let mut green_channel = pwm_slices.pwm3.channel_b;
    let mut blue_channel = pwm_slices.pwm4.channel_a;
    let mut backlight = pwm_slices.pwm2.channel_a;

    red_channel.output_to(pins.gpio6);
    green_channel.output_to(pins.gpio7);
    blue_channel.output_to(pins.gpio8);
    backlight.output_to(pins.gpio20);

    info!("RGB LED configured on GPIO6 (R), GPIO7 (G), GPIO8 (B)");

    let led: Led = PwmRgbLed::new(red_channel, green_channel, blue_channel, true);

    // ST7789 panel on SPI0
    let sclk = pins.gpio18.into_function::<FunctionSpi>();
    let mosi = pins.gpio19.into_function::<FunctionSpi>();
    let cs = pins.gpio17.into_push_pull_output();
    let dc = pins.gpio16.into_push_pull_output();

    let spi_bus = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, sclk)).init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        62.MHz(),
        embedded_hal::spi::MODE_0,
    );
    let spi = ExclusiveDevice::new_no_delay(spi_bus, cs).unwrap();
    let spi_buffer = cortex_m::singleton!(: [u8; 512] = [0; 512]).unwrap();
    let interface = SpiInterface::new(spi, dc, spi_buffer);

    let panel = mipidsi::Builder::new(ST7789, interface)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut delay)
        .unwrap();

    let pixels = cortex_m::singleton!(: [Rgb565; PIXELS] = [Rgb565::BLACK; PIXELS]).unwrap();
    let display = PanelDisplay::new(panel, backlight, FrameBuffer::new(pixels));

    info!("Display configured: ST7789 320x240 on SPI0");

    let config: ClockConfig<Duration> = ClockConfig::default();
    let frame_ms = config.frame_interval.as_millis() as u32;

    // Buttons A/B/X/Y on GPIO12-15
    buttons::install(
        pins.gpio12.into_pull_up_input(),
        pins.gpio13.into_pull_up_input(),
        pins.gpio14.into_pull_up_input(),
        pins.gpio15.into_pull_up_input(),
        time_source,
        config.debounce,
    );
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    info!("=== Hardware Ready ===");

    let mut clock = match ClockApp::new(
        display,
        led,
        PicoRtc::new(rtc),
        &buttons::EDGES,
        &time_source,
        config,
    ) {
        Ok(clock) => clock,
        Err(e) => defmt::panic!("boot failed: {}", defmt::Debug2Format(&e)),
    };

    let mut button_pins = SharedButtons;
    let mut frame_delay = timer;

    loop {
        if let Err(e) = clock.tick(&mut button_pins) {
            error!("tick failed: {}", defmt::Debug2Format(&e));
        }
        frame_delay.delay_ms(frame_ms);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    buttons::on_gpio_interrupt();
}
