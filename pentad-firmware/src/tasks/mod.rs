//! Embassy tasks for the Pentad firmware
//!
//! Task structure:
//! - `button_a_task` / `button_b_task`: debounce the user buttons and
//!   toggle their LEDs
//! - `console_task`: owns the OLED, the serial console and the WS2812
//!   matrix; redraws on button activity and echoes received characters

pub mod buttons;
pub mod console;

pub use buttons::{button_a_task, button_b_task};
pub use console::console_task;
