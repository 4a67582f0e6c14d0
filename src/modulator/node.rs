use super::{Signal, Waveform};

/*
Modulator
=========

A modulator is an oscillator evaluated directly from time rather than from a
running phase accumulator. Each node has a base frequency and amplitude, and
either of those can be driven by another signal:

    frequency' = frequency × frequency_modulator(t)
    amplitude' = amplitude × amplitude_modulator(t)
    phase      = (t × frequency') mod 1
    output     = waveform(phase) × amplitude'

Both children are sampled at the same `t` as their parent. There is no phase
offset handed down the tree.


Building Trees
--------------

  // Carrier at 0.5 Hz, breathing amplitude, wobbling pitch
  let carrier = Modulator::sine(0.5)
      .with_amplitude(0.8)
      .with_amplitude_modulator(Modulator::sine(0.4).with_amplitude(0.5))
      .with_frequency_modulator(Modulator::sine(0.2).with_amplitude(0.5));

Children are moved into their parent, so a node can never end up as its own
ancestor. Depth of recursion equals depth of the tree.


Negative Time
-------------

`%` on f64 keeps the sign of the dividend, so negative time gives a negative
phase. The sine evaluates that without complaint; the result is the same
curve mirrored through the origin of each cycle.
*/

/// Amplitude used when a node is built without an explicit one.
pub const DEFAULT_AMPLITUDE: f64 = 0.8;

pub struct Modulator {
    waveform: Waveform,
    frequency: f64, // cycles per second
    amplitude: f64,
    frequency_modulator: Option<Box<dyn Signal>>,
    amplitude_modulator: Option<Box<dyn Signal>>,
}

impl Modulator {
    pub fn new(waveform: Waveform, frequency: f64) -> Self {
        Self {
            waveform,
            frequency,
            amplitude: DEFAULT_AMPLITUDE,
            frequency_modulator: None,
            amplitude_modulator: None,
        }
    }

    pub fn sine(frequency: f64) -> Self {
        Self::new(Waveform::Sine, frequency)
    }

    pub fn sawtooth(frequency: f64) -> Self {
        Self::new(Waveform::Sawtooth, frequency)
    }

    pub fn square(frequency: f64) -> Self {
        Self::new(Waveform::Square, frequency)
    }

    /// Set the base output scale (nominally 0..1, not enforced).
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Scale this node's frequency by `modulator`'s output.
    ///
    /// The modulator's raw output is used as a multiplier, so a bipolar source
    /// swings the effective frequency through zero and back.
    pub fn with_frequency_modulator(mut self, modulator: impl Signal + 'static) -> Self {
        self.frequency_modulator = Some(Box::new(modulator));
        self
    }

    /// Scale this node's amplitude by `modulator`'s output.
    pub fn with_amplitude_modulator(mut self, modulator: impl Signal + 'static) -> Self {
        self.amplitude_modulator = Some(Box::new(modulator));
        self
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn has_frequency_modulator(&self) -> bool {
        self.frequency_modulator.is_some()
    }

    pub fn has_amplitude_modulator(&self) -> bool {
        self.amplitude_modulator.is_some()
    }
}

impl Signal for Modulator {
    fn sample(&self, time: f64) -> f64 {
        let mut frequency = self.frequency;
        let mut amplitude = self.amplitude;

        if let Some(modulator) = &self.frequency_modulator {
            frequency *= modulator.sample(time);
        }

        if let Some(modulator) = &self.amplitude_modulator {
            amplitude *= modulator.sample(time);
        }

        let phase = (time * frequency) % 1.0;

        self.waveform.evaluate(phase) * amplitude
    }
}
