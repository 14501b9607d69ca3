use crate::{Limits, ScrollPhase};

/// A point-in-time copy of the engine state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which is handy for
/// debugging overlays and snapshot tests. It is not restored by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub target: f64,
    pub frame: u32,
    pub max_frames: u32,
    pub phase: ScrollPhase,
    pub limits: Limits,
}

impl ScrollSnapshot {
    /// Scroll distance as reported to listeners.
    pub fn scroll(&self) -> f64 {
        -self.offset
    }
}
