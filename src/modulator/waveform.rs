#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Oscillator shape of a [`Modulator`](super::Modulator).
///
/// Only `Sine` produces output today. `Sawtooth` and `Square` are accepted so
/// trees can name them, but they evaluate to silence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Square,
}

impl Waveform {
    /// Unit-amplitude value at `phase`, nominally in `[0, 1)`.
    ///
    /// Negative phases (from negative time) are passed straight through.
    #[inline]
    pub fn evaluate(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            // TODO: ramp and pulse evaluation for sawtooth/square
            Waveform::Sawtooth | Waveform::Square => 0.0,
        }
    }
}
