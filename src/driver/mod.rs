//! Frame pacing: when time advances, when samples are taken and when a
//! redraw is due.
//!
//! The [`FrameDriver`] is called once per host refresh and decides what that
//! refresh does. The [`RunLoop`] produces those refreshes at a fixed cadence
//! until its [`StopHandle`] fires.

/// Millisecond clocks.
pub mod clock;
/// Per-refresh time advancement for both pacing modes.
pub mod frame;
/// Fixed-cadence loop with a cancellation handle.
pub mod run_loop;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame::{FrameDriver, FrameMode, Tick, REFRESH_RATE};
pub use run_loop::{RunLoop, StopHandle};
