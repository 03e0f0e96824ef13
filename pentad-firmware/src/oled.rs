//! SSD1306 status screen over I2C.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the LED status screen.
pub fn draw_status<I2C>(display: &mut Display<I2C>, green_on: bool, blue_on: bool)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("Green LED:", Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new(on_off(green_on), Point::new(0, 24), text_style()).draw(display);

    let _ = Text::new("Blue LED:", Point::new(0, 38), text_style()).draw(display);
    let _ = Text::new(on_off(blue_on), Point::new(0, 52), text_style()).draw(display);

    let _ = display.flush();
}

/// Echo a character received over the serial console.
pub fn draw_received_char<I2C>(display: &mut Display<I2C>, ch: char)
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut s: heapless::String<4> = heapless::String::new();
    let _ = s.push(ch);

    display.clear_buffer();
    let _ = Text::new(s.as_str(), Point::new(50, 25), text_style()).draw(display);
    let _ = display.flush();
}

fn on_off(on: bool) -> &'static str {
    if on {
        "On"
    } else {
        "Off"
    }
}
