use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scene::SceneState;

/*
Frame Pacing
============

The host calls `FrameDriver::tick` once per display refresh. The very first
call only records the clock reading as the timebase; nothing is drawn.

Throttled
---------

Redraws at a target rate below the nominal refresh rate by counting raw
refreshes:

    refreshes per redraw = REFRESH_RATE / frame_rate     (60 / 15 = 4)

When the counter reaches that threshold it resets and simulation time is set
to the absolute wall time since the timebase. Samples are taken at render
time from that snapshot.

Continuous
----------

Every refresh integrates the wall time since the previous refresh, scaled by
the scene's direction (+1 / -1) and speed (1 / 4), then resamples the
points buffer:

    time += (now - timebase) / 1000 × direction × speed
    timebase = now

Time always advances before sampling, and sampling always happens before the
caller draws.
*/

/// Nominal host refresh rate the throttle is measured against, in Hz.
pub const REFRESH_RATE: f64 = 60.0;

/// How simulation time and sampling follow the host refresh.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameMode {
    /// Redraw at `frame_rate` with absolute elapsed time, sampling on render.
    Throttled { frame_rate: f64 },
    /// Redraw every refresh, integrating direction- and speed-scaled time.
    Continuous,
}

impl FrameMode {
    pub fn throttled(frame_rate: f64) -> Result<Self> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(Error::InvalidFrameRate(frame_rate));
        }
        Ok(FrameMode::Throttled { frame_rate })
    }
}

/// What a refresh asks of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timebase was just recorded; draw nothing yet.
    Primed,
    /// Throttled mode is between redraws.
    Idle,
    /// Time advanced; draw the scene now.
    Redraw,
}

#[derive(Debug, Clone)]
pub struct FrameDriver {
    mode: FrameMode,
    phase: u32, // raw refreshes since the last throttled redraw
}

impl FrameDriver {
    pub fn new(mode: FrameMode) -> Self {
        Self { mode, phase: 0 }
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Advance `state` for a refresh observed at `now_ms`.
    pub fn tick(&mut self, state: &mut SceneState, now_ms: f64) -> Tick {
        let Some(timebase) = state.timebase else {
            debug!("frame driver primed at {now_ms:.1}ms");
            state.timebase = Some(now_ms);
            return Tick::Primed;
        };

        match self.mode {
            FrameMode::Throttled { frame_rate } => {
                let mut tick = Tick::Idle;

                if f64::from(self.phase) >= REFRESH_RATE / frame_rate {
                    self.phase = 0;
                    state.time = (now_ms - timebase) * 0.001;
                    trace!("throttled redraw at t={:.3}", state.time);
                    tick = Tick::Redraw;
                }

                self.phase += 1;
                tick
            }
            FrameMode::Continuous => {
                let elapsed = (now_ms - timebase) * 0.001;
                state.timebase = Some(now_ms);
                state.advance(elapsed);
                state.recompute();
                trace!("continuous redraw at t={:.3}", state.time);
                Tick::Redraw
            }
        }
    }
}
