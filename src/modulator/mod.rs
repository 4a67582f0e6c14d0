//! Time-driven signal sources that can modulate one another.
//!
//! A modulator is a pure function of time: it carries no running phase, so the
//! same tree can be sampled at any instant, in any order, any number of times.
//! Trees are assembled once with the consuming builder methods on
//! [`Modulator`] and are immutable afterwards.

/// Constant-valued signals.
pub mod constant;
/// Oscillator nodes with optional frequency and amplitude modulators.
pub mod node;
/// Core trait shared by every signal source.
pub mod signal;
/// Closed set of oscillator shapes.
pub mod waveform;

pub use constant::Constant;
pub use node::{Modulator, DEFAULT_AMPLITUDE};
pub use signal::Signal;
pub use waveform::Waveform;
