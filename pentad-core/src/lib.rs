//! Board-agnostic logic for the Pentad demo firmware
//!
//! This crate contains everything that can be tested on the host:
//!
//! - Falling-edge debounce and LED toggle tracking per button
//! - The 5x5 digit pattern table and its output mapping
//! - GRB color packing for the addressable LED matrix

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod button;
pub mod color;
pub mod digits;
