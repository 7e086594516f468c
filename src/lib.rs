pub mod dsp;
pub mod error;

pub use dsp::filter::{moog_response, roland_response};
pub use dsp::{evaluate, FilterCharacter, FilterParams};
pub use error::{FilterError, Result};
pub use num_complex::Complex64;
