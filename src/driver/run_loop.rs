use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use log::{debug, warn};

use super::frame::REFRESH_RATE;

/// Cancels a [`RunLoop`]. Cheap to clone; every clone controls the same loop.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Calls a tick closure once per refresh interval until stopped.
///
/// Each tick may stop the loop through the handle it is given, or fail, in
/// which case the loop ends and the error is returned. The loop sleeps away
/// whatever is left of the interval after a tick.
#[derive(Debug, Clone)]
pub struct RunLoop {
    interval: Duration,
    stop: StopHandle,
}

impl RunLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stop: StopHandle::new(),
        }
    }

    /// Loop at `hz` refreshes per second. Rates that are not finite and
    /// positive fall back to [`REFRESH_RATE`].
    pub fn with_rate(hz: f64) -> Self {
        let hz = if hz.is_finite() && hz > 0.0 {
            hz
        } else {
            warn!("refresh rate {hz} is not positive, using {REFRESH_RATE} Hz");
            REFRESH_RATE
        };
        Self::new(Duration::from_secs_f64(1.0 / hz))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run until the stop handle fires or `tick` fails. Returns the tick count.
    pub fn run<E, F>(&self, mut tick: F) -> Result<u64, E>
    where
        F: FnMut(&StopHandle) -> Result<(), E>,
    {
        let mut ticks = 0u64;

        while !self.stop.is_stopped() {
            let started = Instant::now();

            tick(&self.stop)?;
            ticks += 1;

            if let Some(remaining) = self.interval.checked_sub(started.elapsed()) {
                if !remaining.is_zero() && !self.stop.is_stopped() {
                    thread::sleep(remaining);
                }
            }
        }

        debug!("run loop stopped after {ticks} ticks");
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_from_inside_tick() {
        let run_loop = RunLoop::new(Duration::ZERO);
        let mut seen = 0;
        let ticks = run_loop
            .run::<(), _>(|stop| {
                seen += 1;
                if seen == 3 {
                    stop.stop();
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(seen, 3);
    }

    #[test]
    fn stopped_before_start_never_ticks() {
        let run_loop = RunLoop::new(Duration::ZERO);
        run_loop.stop_handle().stop();
        let ticks = run_loop.run::<(), _>(|_| panic!("should not tick")).unwrap();
        assert_eq!(ticks, 0);
    }

    #[test]
    fn tick_errors_end_the_loop() {
        let run_loop = RunLoop::new(Duration::ZERO);
        let mut count = 0;
        let result = run_loop.run(|_| {
            count += 1;
            if count == 2 {
                Err("boom")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(count, 2);
    }

    #[test]
    fn paces_to_the_interval() {
        let run_loop = RunLoop::new(Duration::from_millis(5));
        let started = Instant::now();
        let mut count = 0;
        run_loop
            .run::<(), _>(|stop| {
                count += 1;
                if count == 4 {
                    stop.stop();
                }
                Ok(())
            })
            .unwrap();
        // Three full sleeps; the last tick stops before sleeping
        assert!(started.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn rate_to_interval() {
        assert_eq!(RunLoop::with_rate(50.0).interval(), Duration::from_millis(20));
    }

    #[test]
    fn unusable_rates_fall_back_to_the_refresh_rate() {
        let default = RunLoop::with_rate(REFRESH_RATE).interval();
        assert!(!default.is_zero());
        for hz in [0.0, -30.0, f64::INFINITY, f64::NAN] {
            assert_eq!(RunLoop::with_rate(hz).interval(), default);
        }
    }
}
