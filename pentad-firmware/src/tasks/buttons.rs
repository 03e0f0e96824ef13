//! Button press tasks
//!
//! One task per user button. Each waits on the GPIO falling edge,
//! re-checks the pin level, and runs the press through its debounce
//! channel before touching the LED and shared state.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;
use portable_atomic::{AtomicBool, Ordering};

use pentad_core::button::ButtonChannel;

use crate::channels::{BLUE_LED_ON, GREEN_LED_ON, STATUS_REFRESH};

/// Button A toggles the green LED
#[embassy_executor::task]
pub async fn button_a_task(btn: Input<'static>, led: Output<'static>) {
    info!("Button A task started");
    watch_button("A", btn, led, &GREEN_LED_ON).await;
}

/// Button B toggles the blue LED
#[embassy_executor::task]
pub async fn button_b_task(btn: Input<'static>, led: Output<'static>) {
    info!("Button B task started");
    watch_button("B", btn, led, &BLUE_LED_ON).await;
}

async fn watch_button(
    name: &'static str,
    mut btn: Input<'static>,
    mut led: Output<'static>,
    state: &'static AtomicBool,
) {
    let mut channel = ButtonChannel::new();

    loop {
        btn.wait_for_falling_edge().await;
        let now_ms = Instant::now().as_millis();

        // Level re-check filters glitches that fired the edge but did
        // not hold the pin low
        if let Some(on) = channel.on_falling_edge(btn.is_low(), now_ms) {
            if on {
                led.set_high();
            } else {
                led.set_low();
            }
            state.store(on, Ordering::Relaxed);
            STATUS_REFRESH.signal(());
            info!("Button {} pressed, LED {}", name, if on { "on" } else { "off" });
        }
    }
}
