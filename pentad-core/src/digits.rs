//! Digit patterns for the 5x5 WS2812 matrix
//!
//! The matrix is wired as a serpentine-free left-to-right strip whose
//! first pixel sits at the bottom-left corner, so every pattern is
//! read back vertically flipped. Digits 2 and 4 were authored in the
//! opposite horizontal orientation and get mirrored as well. The
//! per-digit handling is part of the stored artwork; do not regenerate
//! the table without carrying it over.

use crate::color::Grb;

/// Matrix edge length in pixels.
pub const GRID_SIZE: usize = 5;
/// Pixels per frame, streamed in output order.
pub const PIXEL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Stored artwork, row-major as authored. 1 = lit.
#[rustfmt::skip]
const DIGIT_PATTERNS: [[u8; PIXEL_COUNT]; 10] = [
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 0
    [0, 0, 1, 0, 0,
     0, 1, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 1, 1, 1, 0], // 1
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     0, 0, 0, 1, 0,
     0, 0, 1, 0, 0,
     1, 1, 1, 1, 1], // 2
    [1, 1, 1, 1, 0,
     0, 0, 0, 0, 1,
     0, 1, 1, 1, 0,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 0], // 3
    [0, 0, 0, 1, 0,
     0, 0, 1, 1, 0,
     0, 1, 0, 1, 0,
     1, 1, 1, 1, 1,
     0, 0, 0, 1, 0], // 4
    [1, 1, 1, 1, 1,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 0,
     0, 0, 0, 0, 1,
     1, 1, 1, 1, 0], // 5
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 0,
     1, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 6
    [1, 1, 1, 1, 1,
     0, 0, 0, 1, 0,
     0, 0, 1, 0, 0,
     0, 1, 0, 0, 0,
     0, 1, 0, 0, 0], // 7
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 8
    [0, 1, 1, 1, 0,
     1, 0, 0, 0, 1,
     0, 1, 1, 1, 1,
     0, 0, 0, 0, 1,
     0, 1, 1, 1, 0], // 9
];

/// Pattern index feeding output cell `(row, col)` of `digit`.
///
/// Rows flip vertically for every digit; digits 2 and 4 mirror the
/// columns too.
pub fn source_index(digit: u8, row: usize, col: usize) -> usize {
    if digit == 2 || digit == 4 {
        (4 - row) * 5 + (4 - col)
    } else {
        (4 - row) * 5 + col
    }
}

/// Lit/unlit frame for `digit` in output order, `None` when the value
/// is not a decimal digit.
pub fn frame(digit: u8) -> Option<[bool; PIXEL_COUNT]> {
    if digit > 9 {
        return None;
    }
    let pattern = &DIGIT_PATTERNS[digit as usize];
    let mut out = [false; PIXEL_COUNT];
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            out[row * GRID_SIZE + col] = pattern[source_index(digit, row, col)] != 0;
        }
    }
    Some(out)
}

/// Packed color words for `digit`, one per pixel in output order.
/// Unlit cells carry 0 so the whole frame is always streamed.
pub fn render(digit: u8, color: Grb) -> Option<[u32; PIXEL_COUNT]> {
    let frame = frame(digit)?;
    let mut words = [0u32; PIXEL_COUNT];
    for (word, lit) in words.iter_mut().zip(frame.iter()) {
        if *lit {
            *word = color.word();
        }
    }
    Some(words)
}

/// Decimal digit carried by an ASCII byte, if any.
pub fn digit_from_ascii(byte: u8) -> Option<u8> {
    if byte.is_ascii_digit() {
        Some(byte - b'0')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DIGIT_COLOR;

    #[test]
    fn test_all_digits_render_full_frames() {
        for digit in 0..=9u8 {
            let words = render(digit, DIGIT_COLOR).unwrap();
            assert_eq!(words.len(), PIXEL_COUNT);
            for word in words {
                assert!(word == 0 || word == DIGIT_COLOR.word());
            }
        }
    }

    #[test]
    fn test_out_of_range_digit_is_a_no_op() {
        assert_eq!(frame(10), None);
        assert_eq!(frame(255), None);
        assert_eq!(render(10, DIGIT_COLOR), None);
    }

    #[test]
    fn test_vertical_flip_mapping() {
        // Bottom-left output pixel reads the top-left pattern row
        assert_eq!(source_index(0, 0, 0), 20);
        // Top-right output pixel reads the end of the first pattern row
        assert_eq!(source_index(7, 4, 4), 4);
    }

    #[test]
    fn test_digit_zero_is_a_ring() {
        let f = frame(0).unwrap();
        // The ring is vertically symmetric, so the flip maps it onto
        // itself and the frame matches the authored rows directly
        for (cell, authored) in f.iter().zip(DIGIT_PATTERNS[0].iter()) {
            assert_eq!(*cell, *authored != 0);
        }
        // Center stays dark
        assert!(!f[12]);
    }

    #[test]
    fn test_mirrored_digits_flip_both_axes() {
        for digit in [2u8, 4] {
            let f = frame(digit).unwrap();
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let authored = DIGIT_PATTERNS[digit as usize][(4 - row) * 5 + (4 - col)];
                    assert_eq!(f[row * GRID_SIZE + col], authored != 0);
                }
            }
        }
    }

    #[test]
    fn test_unmirrored_digits_flip_vertically_only() {
        for digit in [0u8, 1, 3, 5, 6, 7, 8, 9] {
            let f = frame(digit).unwrap();
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let authored = DIGIT_PATTERNS[digit as usize][(4 - row) * 5 + col];
                    assert_eq!(f[row * GRID_SIZE + col], authored != 0);
                }
            }
        }
    }

    #[test]
    fn test_digit_seven_top_right_output_cell() {
        // Output (4, 4) sources pattern index 4, the end of the
        // authored top row, which for 7 is lit
        assert_eq!(source_index(7, 4, 4), 4);
        let f = frame(7).unwrap();
        assert_eq!(f[24], DIGIT_PATTERNS[7][4] != 0);
        assert!(f[24]);
    }

    #[test]
    fn test_digit_from_ascii() {
        assert_eq!(digit_from_ascii(b'0'), Some(0));
        assert_eq!(digit_from_ascii(b'9'), Some(9));
        assert_eq!(digit_from_ascii(b'a'), None);
        assert_eq!(digit_from_ascii(b' '), None);
        assert_eq!(digit_from_ascii(b'/'), None);
        assert_eq!(digit_from_ascii(b':'), None);
    }
}
