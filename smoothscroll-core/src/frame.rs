/// Frames rendered per second. Durations are converted to frame counts with this rate.
pub const FRAMES_PER_SECOND: u64 = 60;

/// Converts a duration in milliseconds to a whole number of frames (rounded up).
///
/// A zero duration yields zero frames, which animations treat as a single jump to the target.
pub fn frames_for_duration(duration_ms: u64) -> u32 {
    let frames = duration_ms.saturating_mul(FRAMES_PER_SECOND).div_ceil(1000);
    u32::try_from(frames).unwrap_or(u32::MAX)
}

/// Normalized animation progress for `frame` out of `max_frames`.
///
/// Defined as `1.0` when `max_frames == 0`.
pub fn progress(frame: u32, max_frames: u32) -> f64 {
    if max_frames == 0 {
        return 1.0;
    }
    (f64::from(frame) / f64::from(max_frames)).min(1.0)
}

/// Number of frames elapsed since the current animation started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounter {
    frame: u32,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.frame
    }

    pub fn increment(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}
