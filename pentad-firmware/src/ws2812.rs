//! PIO-based WS2812 matrix driver
//!
//! Uses RP2040's Programmable I/O to generate the 800kHz one-wire
//! waveform the WS2812 pixels expect. The CPU only pushes packed color
//! words; the state machine times every bit on its own.

use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use pentad_core::digits::PIXEL_COUNT;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// WS2812 data rate in bits per second
pub const BIT_RATE_HZ: u32 = 800_000;

/// State machine cycles spent on each data bit
const CYCLES_PER_BIT: u32 = 10;

/// WS2812 strip driver
///
/// Streams packed GRB words to the pixels through a PIO state machine.
pub struct Ws2812<'d, PIO: Instance, const SM: usize> {
    /// PIO state machine generating the waveform
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812<'d, PIO, SM> {
    /// Create a new WS2812 driver
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the strip's data line (must be PIO-capable)
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // Side-set drives the data line. Each bit takes 10 cycles: 3 low
        // while the next bit is fetched, 2 high, then 5 more high for a
        // one or low for a zero, which lands the pulse widths the pixels
        // sample.
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "out x, 1 side 0 [2]",
            "jmp !x do_zero side 1 [1]",
            "jmp bitloop side 1 [4]",
            "do_zero:",
            "nop side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        // Create the PIO pin for the data output
        let data_pio_pin = common.make_pio_pin(data_pin);

        // Configure state machine
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);

        let (int_div, frac_div) = calc_clock_divider(BIT_RATE_HZ);
        // Convert to U24F8: integer in upper 24 bits, fractional in lower 8 bits
        let divider_bits = ((int_div as u32) << 8) | (frac_div as u32);
        cfg.clock_divider = U24F8::from_bits(divider_bits);

        // One 24-bit color per FIFO word, shifted out MSB first
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);

        // The stalled out instruction holds the line low between frames,
        // which doubles as the strip's latch gap
        sm.set_enable(true);

        Self { sm }
    }

    /// Push one pixel to the strip
    ///
    /// The 24-bit GRB word rides in the top bits so the left shift
    /// reaches it first.
    pub async fn write(&mut self, grb: u32) {
        self.sm.tx().wait_push(grb << 8).await;
    }

    /// Stream a whole frame in pixel order
    pub async fn write_frame(&mut self, frame: &[u32; PIXEL_COUNT]) {
        for &word in frame {
            self.write(word).await;
        }
    }
}

/// Calculate the clock divider for a target bit rate
///
/// The program spends `CYCLES_PER_BIT` cycles on every data bit, so the
/// state machine clock must run at `bit_rate_hz * CYCLES_PER_BIT`.
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
fn calc_clock_divider(bit_rate_hz: u32) -> (u16, u8) {
    // To get 8-bit fractional precision, multiply by 256 first
    let divisor = bit_rate_hz * CYCLES_PER_BIT;
    let divider_x256 = (SYS_CLK_HZ as u64 * 256) / (divisor as u64);

    // Split into integer and fractional parts
    let int_part = (divider_x256 / 256).min(0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    (int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_divider() {
        // 125MHz / (800kHz * 10 cycles/bit) = 15.625 = 15 + 160/256
        let (int_part, frac_part) = calc_clock_divider(BIT_RATE_HZ);
        assert_eq!(int_part, 15);
        assert_eq!(frac_part, 160);
    }
}
