use super::Signal;

/// A signal that ignores time and always yields the same value.
///
/// Attached as a modulator it acts as a fixed multiplier, which makes it handy
/// for pinning one branch of a tree while inspecting another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl Signal for Constant {
    #[inline]
    fn sample(&self, _time: f64) -> f64 {
        self.0
    }
}
