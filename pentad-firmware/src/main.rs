//! Pentad - BitDogLab demo firmware
//!
//! Main firmware binary for the BitDogLab RP2040 board. Echoes serial
//! input on the OLED, draws received digits on the 5x5 WS2812 matrix,
//! and toggles the user LEDs from the two buttons.
//!
//! Named after the Greek "pentas" (πεντάς) meaning "a group of five" -
//! for the five-by-five matrix at the center of the demo.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod oled;
mod tasks;
mod ws2812;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pentad firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the serial console
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    // Log output goes over defmt/RTT; only the receive half is read
    let (_tx, rx) = uart.split();

    info!("UART initialized for serial console");

    // Setup I2C1 for the OLED
    // Pin assignments are board-specific (BitDogLab: SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let display = oled::init(i2c);

    info!("OLED initialized");

    // Setup PIO0 for the WS2812 matrix
    // Pin assignment is board-specific (BitDogLab matrix data: GPIO7)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let strip = ws2812::Ws2812::new(&mut common, sm0, p.PIN_7);

    info!("WS2812 matrix initialized");

    // User buttons and LEDs
    // Pin assignments are board-specific (BitDogLab: button A=GPIO5,
    // button B=GPIO6, green LED=GPIO11, blue LED=GPIO12)
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);
    let green_led = Output::new(p.PIN_11, Level::Low);
    let blue_led = Output::new(p.PIN_12, Level::Low);

    // Spawn tasks
    spawner
        .spawn(tasks::button_a_task(button_a, green_led))
        .unwrap();
    spawner
        .spawn(tasks::button_b_task(button_b, blue_led))
        .unwrap();
    spawner
        .spawn(tasks::console_task(display, rx, strip))
        .unwrap();

    info!("All tasks spawned, firmware running");
    info!("Type a character on the serial console to show it on the OLED");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
