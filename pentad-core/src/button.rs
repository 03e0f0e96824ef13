//! Button debounce and LED state tracking
//!
//! Each physical button owns one [`ButtonChannel`]. The edge-interrupt
//! path feeds it falling edges together with the millisecond uptime
//! clock; edges that survive the level re-check and the debounce window
//! toggle the tracked LED state.

/// Debounce window between accepted presses on one button.
pub const DEBOUNCE_DELAY_MS: u64 = 200;

/// Per-button debounce and LED toggle state.
///
/// Mutated only from the edge-interrupt context; the display side reads
/// the published LED state elsewhere, so this struct needs no interior
/// mutability.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    /// State of the LED this button toggles
    led_on: bool,
    /// Uptime of the last accepted press, `None` until the first one
    last_accepted_ms: Option<u64>,
}

impl ButtonChannel {
    /// New channel with the LED off and no press recorded.
    pub const fn new() -> Self {
        Self {
            led_on: false,
            last_accepted_ms: None,
        }
    }

    /// Current LED state.
    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Handle one falling-edge event.
    ///
    /// `pressed` is the pin level re-read after the edge fired (true =
    /// still low, i.e. really pressed); `now_ms` is a monotonic
    /// millisecond clock. Returns the new LED state when the press is
    /// accepted, `None` when the edge is filtered out. Spurious and
    /// bounced edges are not errors, just noise to discard.
    ///
    /// The window is measured between accepted presses only: a rejected
    /// bounce never pushes the window out.
    pub fn on_falling_edge(&mut self, pressed: bool, now_ms: u64) -> Option<bool> {
        if !pressed {
            return None;
        }
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < DEBOUNCE_DELAY_MS {
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        self.led_on = !self.led_on;
        Some(self.led_on)
    }
}

impl Default for ButtonChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_toggles_on() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(true, 5), Some(true));
        assert!(ch.led_on());
    }

    #[test]
    fn test_release_level_is_ignored() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(false, 5), None);
        assert!(!ch.led_on());
    }

    #[test]
    fn test_bounce_within_window_is_filtered() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(true, 1000), Some(true));
        assert_eq!(ch.on_falling_edge(true, 1050), None);
        assert_eq!(ch.on_falling_edge(true, 1199), None);
        assert!(ch.led_on());
    }

    #[test]
    fn test_press_at_window_boundary_is_accepted() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(true, 1000), Some(true));
        assert_eq!(ch.on_falling_edge(true, 1200), Some(false));
    }

    #[test]
    fn test_presses_outside_window_all_toggle() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(true, 0), Some(true));
        assert_eq!(ch.on_falling_edge(true, 500), Some(false));
        assert_eq!(ch.on_falling_edge(true, 1000), Some(true));
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let mut ch = ButtonChannel::new();
        assert_eq!(ch.on_falling_edge(true, 1000), Some(true));
        // Bounce at 1100 is filtered and must not push the window out
        assert_eq!(ch.on_falling_edge(true, 1100), None);
        assert_eq!(ch.on_falling_edge(true, 1200), Some(false));
    }

    #[test]
    fn test_buttons_debounce_independently() {
        let mut a = ButtonChannel::new();
        let mut b = ButtonChannel::new();
        assert_eq!(a.on_falling_edge(true, 1000), Some(true));
        // B sees an edge right after A was accepted
        assert_eq!(b.on_falling_edge(true, 1001), Some(true));
        // A's window still applies to A only
        assert_eq!(a.on_falling_edge(true, 1002), None);
        assert_eq!(b.on_falling_edge(true, 1201), Some(false));
    }
}

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Accepted presses are always spaced by at least the debounce
        /// window and the LED state tracks the parity of the accepted
        /// count, for any edge timing the hardware can produce.
        #[test]
        fn accepted_presses_respect_window(gaps in prop::collection::vec(0u64..1_000, 1..64)) {
            let mut ch = ButtonChannel::new();
            let mut now = 0u64;
            let mut last_accepted: Option<u64> = None;
            let mut accepted = 0u32;

            for gap in gaps {
                now += gap;
                if let Some(state) = ch.on_falling_edge(true, now) {
                    if let Some(prev) = last_accepted {
                        prop_assert!(now - prev >= DEBOUNCE_DELAY_MS);
                    }
                    last_accepted = Some(now);
                    accepted += 1;
                    prop_assert_eq!(state, accepted % 2 == 1);
                }
            }

            prop_assert_eq!(ch.led_on(), accepted % 2 == 1);
        }
    }
}
