use crate::error::{Error, Result};
use crate::modulator::{Modulator, Signal};

/// Largest magnitude a mixed column value may reach.
pub const POINT_LIMIT: f64 = 0.9;

/// Which way simulation time runs in continuous mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeDirection {
    #[default]
    Forward,
    Reverse,
}

impl TimeDirection {
    pub fn sign(self) -> f64 {
        match self {
            TimeDirection::Forward => 1.0,
            TimeDirection::Reverse => -1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TimeDirection::Forward => TimeDirection::Reverse,
            TimeDirection::Reverse => TimeDirection::Forward,
        }
    }
}

/// Time multiplier in continuous mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSpeed {
    #[default]
    Normal,
    Fast,
}

impl TimeSpeed {
    pub fn factor(self) -> f64 {
        match self {
            TimeSpeed::Normal => 1.0,
            TimeSpeed::Fast => 4.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TimeSpeed::Normal => TimeSpeed::Fast,
            TimeSpeed::Fast => TimeSpeed::Normal,
        }
    }
}

/// Everything a frame needs: simulation time, the sample buffer and the
/// modulator trees that fill it.
///
/// One column per logical pixel. Column `i` samples the summed trees at
/// `time + i / width`, so the canvas always shows exactly one unit of time.
pub struct SceneState {
    /// Simulation time in seconds.
    pub time: f64,
    /// Clock reading (ms) of the last update; `None` until the first refresh.
    pub timebase: Option<f64>,
    pub direction: TimeDirection,
    pub speed: TimeSpeed,
    points: Vec<f64>,
    modulators: Vec<Modulator>,
}

impl SceneState {
    /// `width` fixes the number of columns for the lifetime of the state.
    pub fn new(width: usize, modulators: Vec<Modulator>) -> Result<Self> {
        if width == 0 {
            return Err(Error::EmptyPoints);
        }

        Ok(Self {
            time: 0.0,
            timebase: None,
            direction: TimeDirection::default(),
            speed: TimeSpeed::default(),
            points: vec![0.0; width],
            modulators,
        })
    }

    pub fn width(&self) -> usize {
        self.points.len()
    }

    /// Column values from the most recent [`recompute`](Self::recompute).
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn modulators(&self) -> &[Modulator] {
        &self.modulators
    }

    /// Sum of every root tree at `time`, clamped to `±POINT_LIMIT`.
    pub fn mix(&self, time: f64) -> f64 {
        self.modulators
            .iter()
            .map(|modulator| modulator.sample(time))
            .sum::<f64>()
            .clamp(-POINT_LIMIT, POINT_LIMIT)
    }

    /// Value of column `index` at the current time.
    pub fn column(&self, index: usize) -> f64 {
        let phase = index as f64 / self.points.len() as f64;
        self.mix(self.time + phase)
    }

    /// All column values at the current time, computed on demand.
    pub fn columns(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points.len()).map(move |i| self.column(i))
    }

    /// Overwrite the points buffer with the columns at the current time.
    pub fn recompute(&mut self) {
        let width = self.points.len() as f64;
        for i in 0..self.points.len() {
            let value = self.mix(self.time + i as f64 / width);
            self.points[i] = value;
        }
    }

    /// Move time by `elapsed` wall seconds, scaled by direction and speed.
    pub fn advance(&mut self, elapsed: f64) {
        self.time += elapsed * self.direction.sign() * self.speed.factor();
    }

    /// Simulation time with two decimals, as shown in the readout.
    pub fn time_readout(&self) -> String {
        format!("{:.2}", self.time)
    }
}
