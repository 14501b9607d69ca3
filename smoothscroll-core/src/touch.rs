/// Keeps the last two touch positions on the scroll axis.
///
/// The difference between both samples is an estimate of how fast the finger moves: it is
/// applied 1:1 while dragging and replayed as a per-frame velocity on release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    samples: [f64; 2],
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sequence at `y`: both samples become `y`, so the delta is zero.
    pub fn reset(&mut self, y: f64) {
        self.samples = [y, y];
    }

    /// Stores `y` as the newest sample and returns `previous - y`.
    ///
    /// The delta is positive when the finger moves up (towards smaller coordinates).
    pub fn record(&mut self, y: f64) -> f64 {
        let previous = self.samples[1];
        self.samples = [previous, y];
        previous - y
    }

    /// The delta between the two stored samples, without recording anything.
    pub fn delta(&self) -> f64 {
        self.samples[0] - self.samples[1]
    }

    pub fn samples(&self) -> [f64; 2] {
        self.samples
    }
}
