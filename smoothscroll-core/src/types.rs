/// Extents of a scrollable surface along the scroll axis, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Full height of the scrolled content.
    pub content: f64,
    /// Visible height of the viewport the content scrolls in.
    pub viewport: f64,
}

impl Geometry {
    pub fn new(content: f64, viewport: f64) -> Self {
        Self { content, viewport }
    }
}

/// The host element being scrolled.
///
/// The engine keeps the authoritative offset itself and only writes it here; it never reads a
/// position back from the surface.
pub trait Surface {
    /// Applies a translation along the scroll axis (e.g. `translateY(offset px)`).
    fn set_offset(&mut self, offset: f64);

    /// Current content/viewport extents. Read whenever limits are needed.
    fn geometry(&self) -> Geometry;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_offset(&mut self, offset: f64) {
        (**self).set_offset(offset);
    }

    fn geometry(&self) -> Geometry {
        (**self).geometry()
    }
}

/// Extra room allowed past the natural scroll range, as read from the limit modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitSlack {
    pub top: f64,
    pub bottom: f64,
}

/// The clamping range for offsets.
///
/// Offsets are `<= 0` in the normal case: `max` is the top bound (content at rest) and `min`
/// is the bottom bound (content scrolled all the way).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    /// Creates limits, collapsing an inverted range onto `max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    /// Limits for `geometry` extended by `slack` on both ends.
    ///
    /// Content shorter than its viewport cannot scroll: the range collapses to the top bound.
    pub fn from_geometry(geometry: Geometry, slack: LimitSlack) -> Self {
        let scrollable = geometry.content - geometry.viewport + slack.bottom;
        Self::new(-scrollable, slack.top)
    }

    /// Clamps `offset` into `[min, max]`. `NaN` maps to `max`.
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() || offset > self.max {
            self.max
        } else if offset < self.min {
            self.min
        } else {
            offset
        }
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.min && offset <= self.max
    }

    /// Largest scroll distance, as a positive magnitude.
    pub fn max_scroll(&self) -> f64 {
        -self.min
    }
}

/// What the engine is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A finger is down and the content follows it.
    Touch,
    Wheel,
    /// Momentum release after a touch sequence.
    Momentum,
    /// A programmatic `manual_scroll`.
    Manual,
}

impl ScrollPhase {
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Wheel | Self::Momentum | Self::Manual)
    }
}

/// Result of handing a fired frame to an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The frame handle was cancelled or superseded; nothing was applied.
    Stale,
    /// A frame was applied and the next one has been requested.
    Running,
    /// The final frame was applied; the animation is over.
    Finished,
}
