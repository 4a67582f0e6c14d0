//! The fixed modulator trees each variant animates.

use crate::modulator::Modulator;

/// One carrier whose amplitude breathes and whose frequency wobbles.
///
/// ```text
/// sine 0.5 Hz ×0.8
/// ├── amplitude: sine 0.4 Hz ×0.5
/// └── frequency: sine 0.2 Hz ×0.5
/// ```
pub fn dot_plot() -> Vec<Modulator> {
    vec![Modulator::sine(0.5)
        .with_amplitude(0.8)
        .with_amplitude_modulator(Modulator::sine(0.4).with_amplitude(0.5))
        .with_frequency_modulator(Modulator::sine(0.2).with_amplitude(0.5))]
}

/// A slow swell plus a faster ripple whose depth is itself modulated.
///
/// ```text
/// sine 0.3 Hz ×0.6
/// └── frequency: sine 0.05 Hz ×0.8
/// sine 0.8 Hz ×0.3
/// └── amplitude: sine 0.1 Hz ×0.7
///     └── frequency: sine 0.01 Hz ×0.9
/// ```
pub fn filled_curve() -> Vec<Modulator> {
    vec![
        Modulator::sine(0.3)
            .with_amplitude(0.6)
            .with_frequency_modulator(Modulator::sine(0.05).with_amplitude(0.8)),
        Modulator::sine(0.8)
            .with_amplitude(0.3)
            .with_amplitude_modulator(
                Modulator::sine(0.1)
                    .with_amplitude(0.7)
                    .with_frequency_modulator(Modulator::sine(0.01).with_amplitude(0.9)),
            ),
    ]
}
