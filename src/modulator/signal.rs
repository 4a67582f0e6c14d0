/// A scalar signal defined for every instant.
///
/// Implementations must be pure: sampling twice at the same `time` yields the
/// same value. Composite signals own their inputs, which keeps every
/// modulation graph a tree.
pub trait Signal {
    fn sample(&self, time: f64) -> f64;
}

/// Allow boxed signals to be used as signals (for dynamic dispatch)
impl Signal for Box<dyn Signal> {
    fn sample(&self, time: f64) -> f64 {
        (**self).sample(time)
    }
}
