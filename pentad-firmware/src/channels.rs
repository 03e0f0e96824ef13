//! Inter-task communication
//!
//! Static state shared between the button tasks and the console task.
//! Uses embassy-sync and portable-atomic primitives so the interrupt-fed
//! button path and the polling console loop never block each other.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

/// Green LED state, written only by the button A task.
pub static GREEN_LED_ON: AtomicBool = AtomicBool::new(false);

/// Blue LED state, written only by the button B task.
pub static BLUE_LED_ON: AtomicBool = AtomicBool::new(false);

/// Signal that the status screen needs a redraw.
///
/// Set on every accepted button press and cleared by the console loop
/// right before it redraws, so presses landing between two redraws
/// coalesce into one.
pub static STATUS_REFRESH: Signal<CriticalSectionRawMutex, ()> = Signal::new();
