use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FilterError, Result};

/*
Analog Filter Characters
========================

Both characters are closed-form approximations evaluated at one operating
point (amplitude I, cutoff fc, quality Q). With w = 2*pi*fc:

| character | response                                  | shape            |
| --------- | ----------------------------------------- | ---------------- |
| Moog      | I * (1 - 4*pi^2*fc^2) / (1 + Q*w*i)       | low-pass ladder  |
| Roland    | (2*pi*I*fc*i) / (1 - 4*pi^2*fc^2 + Q*w*i) | band-pass-like   |

I only ever appears as a linear factor, so scaling the amplitude scales the
output by the same amount.

Denominators are not guarded. A zero denominator gives whatever complex
division produces (inf / NaN).
*/

/// Which analog character to evaluate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterCharacter {
    #[default]
    Moog,
    Roland,
}

impl FilterCharacter {
    pub const ALL: [FilterCharacter; 2] = [FilterCharacter::Moog, FilterCharacter::Roland];

    pub fn name(self) -> &'static str {
        match self {
            FilterCharacter::Moog => "Moog",
            FilterCharacter::Roland => "Roland",
        }
    }

    /// Evaluate this character's response at `params`.
    pub fn evaluate(self, params: &FilterParams) -> Complex64 {
        let FilterParams {
            amplitude,
            cutoff_hz,
            q,
        } = *params;

        let output = match self {
            FilterCharacter::Moog => moog_response(amplitude, cutoff_hz, q),
            FilterCharacter::Roland => roland_response(amplitude, cutoff_hz, q),
        };

        trace!(
            character = self.name(),
            amplitude,
            cutoff_hz,
            q,
            re = output.re,
            im = output.im,
            "evaluated filter response"
        );
        output
    }
}

impl fmt::Display for FilterCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterCharacter {
    type Err = FilterError;

    // Case-sensitive: "moog" is not a character.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Moog" => Ok(FilterCharacter::Moog),
            "Roland" => Ok(FilterCharacter::Roland),
            other => {
                debug!(selector = other, "rejected filter selector");
                Err(FilterError::InvalidFilterType {
                    name: other.to_string(),
                })
            }
        }
    }
}

/// Operating point shared by both characters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub amplitude: f64,
    pub cutoff_hz: f64,
    pub q: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            cutoff_hz: 1000.0,
            q: 0.7,
        }
    }
}

impl FilterParams {
    pub fn new(amplitude: f64, cutoff_hz: f64, q: f64) -> Self {
        Self {
            amplitude,
            cutoff_hz,
            q,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_cutoff(mut self, cutoff_hz: f64) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }
}

#[inline]
pub fn angular_frequency(cutoff_hz: f64) -> f64 {
    TAU * cutoff_hz
}

// 1 - 4*pi^2*fc^2, the real part both characters share.
#[inline]
fn real_term(cutoff_hz: f64) -> f64 {
    1.0 - 4.0 * PI * PI * cutoff_hz * cutoff_hz
}

/// Moog response: `I * (1 - 4*pi^2*fc^2) / (1 + Q*w*i)`.
pub fn moog_response(amplitude: f64, cutoff_hz: f64, q: f64) -> Complex64 {
    let w = angular_frequency(cutoff_hz);
    let numerator = Complex64::new(amplitude * real_term(cutoff_hz), 0.0);
    let denominator = Complex64::new(1.0, q * w);
    numerator / denominator
}

/// Roland response: `(2*pi*I*fc*i) / (1 - 4*pi^2*fc^2 + Q*w*i)`.
pub fn roland_response(amplitude: f64, cutoff_hz: f64, q: f64) -> Complex64 {
    let w = angular_frequency(cutoff_hz);
    let numerator = Complex64::new(0.0, 2.0 * PI * amplitude * cutoff_hz);
    let denominator = Complex64::new(real_term(cutoff_hz), q * w);
    numerator / denominator
}

/// Evaluate the character named by `selector` at (I, fc, Q).
///
/// Only `"Moog"` and `"Roland"` are accepted; anything else is
/// [`FilterError::InvalidFilterType`].
pub fn evaluate(amplitude: f64, cutoff_hz: f64, q: f64, selector: &str) -> Result<Complex64> {
    let character: FilterCharacter = selector.parse()?;
    Ok(character.evaluate(&FilterParams::new(amplitude, cutoff_hz, q)))
}
