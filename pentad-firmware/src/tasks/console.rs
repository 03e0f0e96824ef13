//! Serial console task
//!
//! Owns the OLED, the UART console and the WS2812 matrix. Alternates
//! between two jobs the way a superloop would: redraw the status screen
//! when a button press signalled for one, then poll the console for up
//! to 10ms and echo whatever arrived.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Read;
use portable_atomic::Ordering;

use pentad_core::color::DIGIT_COLOR;
use pentad_core::digits::{digit_from_ascii, render};

use crate::channels::{BLUE_LED_ON, GREEN_LED_ON, STATUS_REFRESH};
use crate::oled::{self, Display};
use crate::ws2812::Ws2812;

/// Serial poll window per loop pass
const SERIAL_POLL_MS: u64 = 10;

/// Console task - status screen redraws and serial echo
#[embassy_executor::task]
pub async fn console_task(
    mut display: Display<I2c<'static, I2C1, Blocking>>,
    mut rx: BufferedUartRx,
    mut strip: Ws2812<'static, PIO0, 0>,
) {
    info!("Console task started");

    let mut buf = [0u8; 1];

    loop {
        // Redraw the status screen if a button press asked for one.
        // Taking the signal before drawing means a press landing during
        // the redraw gets its own pass instead of being lost.
        if STATUS_REFRESH.try_take().is_some() {
            let green_on = GREEN_LED_ON.load(Ordering::Relaxed);
            let blue_on = BLUE_LED_ON.load(Ordering::Relaxed);
            oled::draw_status(&mut display, green_on, blue_on);
            trace!("Status screen redrawn");
        }

        // Bounded poll keeps the loop responsive to button activity
        // even when the console sits idle
        match with_timeout(Duration::from_millis(SERIAL_POLL_MS), rx.read(&mut buf)).await {
            Ok(Ok(n)) if n > 0 => {
                let ch = buf[0];
                debug!("Received character: {}", ch as char);

                oled::draw_received_char(&mut display, ch as char);

                if let Some(digit) = digit_from_ascii(ch) {
                    show_digit(&mut strip, digit).await;
                }
            }
            Ok(Ok(_)) => {
                // Zero-length read, nothing to do
            }
            Ok(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
            Err(_) => {
                // Poll window elapsed with no input
            }
        }
    }
}

/// Draw one digit on the matrix
async fn show_digit(strip: &mut Ws2812<'static, PIO0, 0>, digit: u8) {
    if let Some(frame) = render(digit, DIGIT_COLOR) {
        strip.write_frame(&frame).await;
        trace!("Matrix shows digit {}", digit);
    }
}
