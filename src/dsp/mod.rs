//! Closed-form analog filter responses.
//!
//! Each response is a pure function of one operating point (amplitude, cutoff,
//! quality factor) and returns a single complex value. Nothing here holds
//! filter state; there are no coefficients, delay lines or sample loops.

/// Moog and Roland characters and the selector that picks between them.
pub mod filter;

pub use filter::{evaluate, FilterCharacter, FilterParams};
